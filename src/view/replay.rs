use {
    crate::view::{
        scheduler::{ImmediateScheduler, Scheduler},
        subscription::Subscription,
        Observer, OuterViewPort, View,
    },
    std::{
        ops::Deref,
        sync::{Arc, RwLock},
    },
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
               Replay View
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// A stream of values that remembers the most recent ones.
///
/// Unlike a [`SingletonView`](crate::view::singleton::SingletonView),
/// the message *is* the new value.
pub trait ReplayView<Item>: View<Msg = Item> {
    /// Retained values, oldest first.
    fn history(&self) -> Vec<Item>;
}

impl<Item, V: ReplayView<Item> + ?Sized> ReplayView<Item> for RwLock<V> {
    fn history(&self) -> Vec<Item> {
        self.read().unwrap().history()
    }
}

impl<Item, V: ReplayView<Item> + ?Sized> ReplayView<Item> for Arc<V> {
    fn history(&self) -> Vec<Item> {
        self.deref().history()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub struct ReplaySubscriber<Item, F>
where
    F: Fn(Item) + Send + Sync,
{
    f: Arc<F>,
    scheduler: Arc<dyn Scheduler>,
    _phantom: std::marker::PhantomData<fn(Item)>,
}

impl<Item, F> ReplaySubscriber<Item, F>
where
    Item: Send + Sync + 'static,
    F: Fn(Item) + Send + Sync + 'static,
{
    fn deliver(&self, value: Item) {
        let f = Arc::downgrade(&self.f);
        self.scheduler.schedule(Box::new(move || {
            if let Some(f) = f.upgrade() {
                f(value)
            }
        }));
    }
}

impl<Item, F> Observer<dyn ReplayView<Item>> for ReplaySubscriber<Item, F>
where
    Item: Clone + Send + Sync + 'static,
    F: Fn(Item) + Send + Sync + 'static,
{
    fn reset(&mut self, view: Option<Arc<dyn ReplayView<Item>>>) {
        if let Some(view) = view {
            for value in view.history() {
                self.deliver(value);
            }
        }
    }

    fn notify(&mut self, msg: &Item) {
        self.deliver(msg.clone());
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<Item: Clone + Send + Sync + 'static> OuterViewPort<dyn ReplayView<Item>> {
    /// Replays the retained history to `f`, then passes on every new value.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(Item) + Send + Sync + 'static,
    {
        self.subscribe_on(Arc::new(ImmediateScheduler), f)
    }

    pub fn subscribe_on<F>(&self, scheduler: Arc<dyn Scheduler>, f: F) -> Subscription
    where
        F: Fn(Item) + Send + Sync + 'static,
    {
        let sub = Arc::new(RwLock::new(ReplaySubscriber {
            f: Arc::new(f),
            scheduler,
            _phantom: std::marker::PhantomData,
        }));

        self.add_observer(sub.clone());
        debug!("new replay subscription");
        Subscription::new(sub)
    }
}
