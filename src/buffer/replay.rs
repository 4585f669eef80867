use {
    crate::view::{
        replay::ReplayView, InnerViewPort, OuterViewPort, UpdateTask, View, ViewPort,
    },
    std::{
        collections::VecDeque,
        sync::{Arc, RwLock},
    },
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// The most recent values pushed into a [`ReplayBuffer`].
pub struct ReplayHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> ReplayHistory<T> {
    fn record(&mut self, val: T) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(val);
    }
}

impl<T> View for ReplayHistory<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Msg = T;
}

impl<T> ReplayView<T> for ReplayHistory<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn history(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
               Replay Buffer
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Publishes every pushed value and keeps the last `capacity` of them
/// for subscribers that arrive later.
#[derive(Clone)]
pub struct ReplayBuffer<T>
where
    T: Clone + Send + Sync + 'static,
{
    data: Arc<RwLock<ReplayHistory<T>>>,
    port: InnerViewPort<dyn ReplayView<T>>,
}

impl<T> ReplayBuffer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn with_port(capacity: usize, port: InnerViewPort<dyn ReplayView<T>>) -> Self {
        let data = Arc::new(RwLock::new(ReplayHistory {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }));
        port.set_view(Some(data.clone()));

        ReplayBuffer { data, port }
    }

    pub fn new(capacity: usize) -> Self {
        ReplayBuffer::with_port(capacity, ViewPort::new().into_inner())
    }

    pub fn get_port(&self) -> OuterViewPort<dyn ReplayView<T>> {
        self.port.0.outer()
    }

    pub fn capacity(&self) -> usize {
        self.data.read().unwrap().capacity
    }

    pub fn history(&self) -> Vec<T> {
        self.data.read().unwrap().history()
    }

    pub fn push(&mut self, val: T) {
        self.data.write().unwrap().record(val.clone());
        self.port.notify(&val);
        self.port.0.update();
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
