use {
    crate::view::{
        scheduler::{ImmediateScheduler, Scheduler},
        singleton::SingletonView,
        Observer, OuterViewPort,
    },
    std::{
        any::Any,
        sync::{Arc, RwLock},
    },
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
               Subscription
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Keeps a subscriber alive.
///
/// Ports only hold their observers weakly, so the subscriber stops
/// receiving values as soon as this handle is dropped or cancelled.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    keepalive: Arc<dyn Any + Send + Sync>,
}

impl Subscription {
    pub fn new<O: Send + Sync + 'static>(observer: Arc<RwLock<O>>) -> Self {
        Subscription {
            keepalive: observer,
        }
    }

    pub fn cancel(self) {
        debug!("subscription cancelled");
    }

    pub fn disposed_by(self, bag: &mut DisposeBag) {
        bag.insert(self);
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Owns a group of subscriptions and cancels all of them when dropped.
#[derive(Default)]
pub struct DisposeBag {
    subscriptions: Vec<Subscription>,
}

impl DisposeBag {
    pub fn new() -> Self {
        DisposeBag::default()
    }

    pub fn insert(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Cancels everything collected so far. The bag can be reused afterwards.
    pub fn dispose(&mut self) {
        self.subscriptions.clear();
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
           Singleton Subscriber
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
pub struct SingletonSubscriber<Item, F>
where
    F: Fn(Item) + Send + Sync,
{
    src_view: Option<Arc<dyn SingletonView<Item = Item>>>,
    f: Arc<F>,
    scheduler: Arc<dyn Scheduler>,
}

impl<Item, F> SingletonSubscriber<Item, F>
where
    Item: Send + Sync + 'static,
    F: Fn(Item) + Send + Sync + 'static,
{
    fn deliver(&self) {
        if let Some(value) = self.src_view.as_ref().and_then(|view| view.try_get()) {
            // queued jobs must not outlive the subscription
            let f = Arc::downgrade(&self.f);
            self.scheduler.schedule(Box::new(move || {
                if let Some(f) = f.upgrade() {
                    f(value)
                }
            }));
        }
    }
}

impl<Item, F> Observer<dyn SingletonView<Item = Item>> for SingletonSubscriber<Item, F>
where
    Item: Send + Sync + 'static,
    F: Fn(Item) + Send + Sync + 'static,
{
    fn reset(&mut self, view: Option<Arc<dyn SingletonView<Item = Item>>>) {
        self.src_view = view;
        self.deliver();
    }

    fn notify(&mut self, _msg: &()) {
        self.deliver();
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<Item: Send + Sync + 'static> OuterViewPort<dyn SingletonView<Item = Item>> {
    /// Calls `f` with the current value right away and then with the
    /// new value after every change, on the publishing thread.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(Item) + Send + Sync + 'static,
    {
        self.subscribe_on(Arc::new(ImmediateScheduler), f)
    }

    /// Like [`subscribe`](Self::subscribe), but values are handed to
    /// `scheduler` for delivery instead of calling `f` directly.
    pub fn subscribe_on<F>(&self, scheduler: Arc<dyn Scheduler>, f: F) -> Subscription
    where
        F: Fn(Item) + Send + Sync + 'static,
    {
        let sub = Arc::new(RwLock::new(SingletonSubscriber {
            src_view: None,
            f: Arc::new(f),
            scheduler,
        }));

        self.add_observer(sub.clone());
        debug!("new singleton subscription");
        Subscription::new(sub)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{
        buffer::singleton::*,
        view::{scheduler::main_queue, subscription::*},
    };
    use std::sync::Mutex;

    fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        (seen, move |x| s.lock().unwrap().push(x))
    }

    #[test]
    fn subscriber_gets_current_then_updates() {
        let mut buffer = SingletonBuffer::new(1);
        let (seen, f) = recorder();
        let sub = buffer.get_port().subscribe(f);

        assert_eq!(*seen.lock().unwrap(), vec![1]);

        buffer.set(2);
        buffer.set(2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 2]);
        drop(sub);
    }

    #[test]
    fn cancelled_subscriber_stops_receiving() {
        let mut buffer = SingletonBuffer::new('a');
        let (seen, f) = recorder();
        let sub = buffer.get_port().subscribe(f);

        buffer.set('b');
        sub.cancel();
        buffer.set('c');

        assert_eq!(*seen.lock().unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn dispose_bag_cancels_everything() {
        let mut buffer = SingletonBuffer::new(0u8);
        let (seen, f) = recorder();
        let (seen2, g) = recorder();

        let mut bag = DisposeBag::new();
        buffer.get_port().subscribe(f).disposed_by(&mut bag);
        buffer.get_port().subscribe(g).disposed_by(&mut bag);
        assert_eq!(bag.len(), 2);

        buffer.set(5);
        bag.dispose();
        assert!(bag.is_empty());
        buffer.set(6);

        assert_eq!(*seen.lock().unwrap(), vec![0, 5]);
        assert_eq!(*seen2.lock().unwrap(), vec![0, 5]);
    }

    #[test]
    fn subscribe_on_main_queue_defers_delivery() {
        let (queue, main) = main_queue();
        let mut buffer = SingletonBuffer::new(10);
        let (seen, f) = recorder();
        let sub = buffer.get_port().subscribe_on(Arc::new(queue), f);

        buffer.set(11);
        assert!(seen.lock().unwrap().is_empty());

        assert_eq!(main.drain(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![10, 11]);
        drop(sub);
    }

    #[test]
    fn cancel_drops_values_still_queued() {
        let (queue, main) = main_queue();
        let mut buffer = SingletonBuffer::new(1);
        let (seen, f) = recorder();
        let sub = buffer.get_port().subscribe_on(Arc::new(queue), f);

        buffer.set(2);
        sub.cancel();
        main.drain();

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn dropped_bag_drops_values_still_queued() {
        let (queue, main) = main_queue();
        let mut buffer = SingletonBuffer::new(1);
        let (seen, f) = recorder();

        let mut bag = DisposeBag::new();
        buffer
            .get_port()
            .subscribe_on(Arc::new(queue), f)
            .disposed_by(&mut bag);

        buffer.set(2);
        main.drain();
        buffer.set(3);
        drop(bag);
        main.drain();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn unset_source_is_skipped() {
        let port: OuterViewPort<dyn SingletonView<Item = u8>> = OuterViewPort::default();
        let (seen, f) = recorder();
        let _sub = port.map(|x| x + 1).subscribe(f);

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn late_subscriber_sees_only_latest() {
        let mut buffer = SingletonBuffer::new(String::from("first"));
        buffer.set("second".into());
        buffer.set("third".into());

        let (seen, f) = recorder();
        let _sub = buffer.get_port().subscribe(f);
        assert_eq!(*seen.lock().unwrap(), vec![String::from("third")]);
    }
}
