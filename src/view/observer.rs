use {
    crate::view::{
        channel::{queue_channel, QueueReceiver, QueueSender},
        View,
    },
    std::sync::RwLock,
    std::sync::{Arc, Weak},
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Observer
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Receives the view once on `reset` (and again whenever the port
/// switches to another view) and a message on every change.
pub trait Observer<V: View + ?Sized>: Send + Sync {
    fn reset(&mut self, _view: Option<Arc<V>>) {}
    fn notify(&mut self, msg: &V::Msg);
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<V: View + ?Sized, O: Observer<V>> Observer<V> for Arc<RwLock<O>> {
    fn reset(&mut self, view: Option<Arc<V>>) {
        self.write().unwrap().reset(view);
    }

    fn notify(&mut self, msg: &V::Msg) {
        self.write().unwrap().notify(msg);
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                 Broadcast
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Fan-out to every live observer of a port.
///
/// `notify` only queues the message; delivery happens on `update`.
/// Observers are held weakly, so an observer nobody else keeps alive
/// is silently dropped from the list.
pub struct ObserverBroadcast<V: View + ?Sized>
where
    V::Msg: Send + Sync,
{
    rx: QueueReceiver<V::Msg>,
    tx: QueueSender<V::Msg>,
    observers: Vec<Weak<RwLock<dyn Observer<V>>>>,
}

impl<V: View + ?Sized> ObserverBroadcast<V>
where
    V::Msg: Clone + Send + Sync,
{
    pub fn new() -> Self {
        let (tx, rx) = queue_channel::<V::Msg>();
        ObserverBroadcast {
            rx,
            tx,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, obs: Weak<RwLock<dyn Observer<V>>>) {
        self.cleanup();
        self.observers.push(obs);
    }

    fn cleanup(&mut self) {
        self.observers.retain(|o| o.strong_count() > 0);
    }

    fn iter(&self) -> impl Iterator<Item = Arc<RwLock<dyn Observer<V>>>> + '_ {
        self.observers.iter().filter_map(|o| o.upgrade())
    }

    /// Number of observers that are still alive.
    pub fn observer_count(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    pub fn update(&self) {
        if let Some(msg_vec) = self.rx.try_recv() {
            for msg in msg_vec {
                let mut delivered = 0;
                for o in self.iter() {
                    o.write().unwrap().notify(&msg);
                    delivered += 1;
                }
                trace!("broadcast delivered to {} observers", delivered);
            }
        }
    }
}

impl<V: View + ?Sized> Default for ObserverBroadcast<V>
where
    V::Msg: Clone + Send + Sync,
{
    fn default() -> Self {
        ObserverBroadcast::new()
    }
}

impl<V: View + ?Sized> Observer<V> for ObserverBroadcast<V>
where
    V::Msg: Clone,
{
    fn reset(&mut self, view: Option<Arc<V>>) {
        for o in self.iter() {
            o.write().unwrap().reset(view.clone());
        }
    }

    fn notify(&mut self, msg: &V::Msg) {
        self.tx.send(msg.clone());
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub struct NotifyFnObserver<V, F>
where
    V: View + ?Sized,
    F: Fn(&V::Msg) + Send + Sync,
{
    f: F,
    _phantom: std::marker::PhantomData<V>,
}

impl<V, F> NotifyFnObserver<V, F>
where
    V: View + ?Sized,
    F: Fn(&V::Msg) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        NotifyFnObserver {
            f,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<V, F> Observer<V> for NotifyFnObserver<V, F>
where
    V: View + ?Sized,
    F: Fn(&V::Msg) + Send + Sync,
{
    fn notify(&mut self, msg: &V::Msg) {
        (self.f)(msg);
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::view::{observer::*, port::ViewPort};
    use std::sync::{Arc, Mutex};

    struct Counter;

    impl View for Counter {
        type Msg = u32;
    }

    #[test]
    fn broadcast_delivers_on_update() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let port = ViewPort::<Counter>::new();

        let obs = {
            let seen = seen.clone();
            port.outer()
                .add_notify_fn(move |msg: &u32| seen.lock().unwrap().push(*msg))
        };

        port.inner().notify(&1);
        port.inner().notify(&2);
        assert!(seen.lock().unwrap().is_empty());

        port.get_cast().read().unwrap().update();
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        drop(obs);
    }

    #[test]
    fn dropped_observer_is_skipped() {
        let seen = Arc::new(Mutex::new(0));
        let port = ViewPort::<Counter>::new();

        let obs = {
            let seen = seen.clone();
            port.outer()
                .add_notify_fn(move |_: &u32| *seen.lock().unwrap() += 1)
        };
        assert_eq!(port.get_cast().read().unwrap().observer_count(), 1);

        drop(obs);
        assert_eq!(port.get_cast().read().unwrap().observer_count(), 0);

        port.inner().notify(&7);
        port.get_cast().read().unwrap().update();
        assert_eq!(*seen.lock().unwrap(), 0);
    }
}
