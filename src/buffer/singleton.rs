use {
    crate::view::{
        singleton::SingletonView, InnerViewPort, OuterViewPort, UpdateTask, View, ViewPort,
    },
    std::sync::RwLock,
    std::{
        ops::{Deref, DerefMut},
        sync::Arc,
    },
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub struct SingletonBufferView<T: Clone + Send + Sync + 'static>(pub Arc<RwLock<T>>);

impl<T> View for SingletonBufferView<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Msg = ();
}

impl<T> SingletonView for SingletonBufferView<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    fn get(&self) -> Self::Item {
        self.0.read().unwrap().clone()
    }
}

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
             Singleton Buffer
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// A single mutable value that publishes itself on every `set`.
///
/// Publishing is synchronous: when `set` returns, every observer of the
/// port (and of every projection derived from it) has been notified.
/// Setting an equal value publishes again.
#[derive(Clone)]
pub struct SingletonBuffer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub value: Arc<RwLock<T>>,
    pub port: InnerViewPort<dyn SingletonView<Item = T>>,
}

impl<T> SingletonBuffer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn with_port(value: T, port: InnerViewPort<dyn SingletonView<Item = T>>) -> Self {
        let value = Arc::new(RwLock::new(value));
        port.set_view(Some(Arc::new(SingletonBufferView(value.clone()))));

        SingletonBuffer { value, port }
    }

    pub fn new(value: T) -> Self {
        SingletonBuffer::with_port(value, ViewPort::new().into_inner())
    }

    pub fn get_port(&self) -> OuterViewPort<dyn SingletonView<Item = T>> {
        self.port.0.outer()
    }

    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    pub fn get_mut(&self) -> MutableSingletonAccess<T> {
        MutableSingletonAccess {
            buf: self.clone(),
            val: self.get(),
        }
    }

    pub fn set(&mut self, new_value: T) {
        let mut v = self.value.write().unwrap();
        *v = new_value;
        drop(v);
        self.port.notify(&());
        self.port.0.update();
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Port on a value that never changes.
/// Subscribers get the value once.
pub fn just<T>(value: T) -> OuterViewPort<dyn SingletonView<Item = T>>
where
    T: Clone + Send + Sync + 'static,
{
    SingletonBuffer::new(value).get_port()
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Write-back guard returned by [`SingletonBuffer::get_mut`].
/// The modified value is published when the guard is dropped.
pub struct MutableSingletonAccess<T>
where
    T: Clone + Send + Sync + 'static,
{
    buf: SingletonBuffer<T>,
    val: T,
}

impl<T> Deref for MutableSingletonAccess<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.val
    }
}

impl<T> DerefMut for MutableSingletonAccess<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.val
    }
}

impl<T> Drop for MutableSingletonAccess<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.buf.set(self.val.clone());
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::buffer::singleton::*;
    use std::sync::Mutex;

    #[test]
    fn singleton_buffer1() {
        let buffer = SingletonBuffer::<char>::new('a');
        let port = buffer.get_port();

        assert_eq!(buffer.get(), 'a');
        assert_eq!(port.get_view().unwrap().get(), 'a');

        *buffer.get_mut() = 'b';
        assert_eq!(buffer.get(), 'b');
        assert_eq!(port.get_view().unwrap().get(), 'b');
    }

    #[test]
    fn set_notifies_synchronously() {
        let mut buffer = SingletonBuffer::new(0.0f64);
        let hits = Arc::new(Mutex::new(0));

        let obs = {
            let hits = hits.clone();
            buffer
                .get_port()
                .add_notify_fn(move |_: &()| *hits.lock().unwrap() += 1)
        };

        buffer.set(1.5);
        assert_eq!(*hits.lock().unwrap(), 1);

        buffer.set(1.5);
        assert_eq!(*hits.lock().unwrap(), 2);
        drop(obs);
    }

    #[test]
    fn just_is_constant() {
        let port = just("Hello");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let _sub = port.subscribe(move |x| s.lock().unwrap().push(x));

        assert_eq!(*seen.lock().unwrap(), vec!["Hello"]);
    }
}
