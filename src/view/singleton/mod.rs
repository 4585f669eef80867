use {
    crate::view::View,
    std::{ops::Deref, sync::{Arc, RwLock}},
};

/// A view on exactly one value.
///
/// The message carries no data; observers re-read the value with `get()`
/// when notified. Always reading the latest value is what gives new
/// subscribers "replay of latest" for free.
pub trait SingletonView: View<Msg = ()> {
    type Item;

    fn get(&self) -> Self::Item;

    /// `None` while the value cannot be produced yet, e.g. a derived
    /// view whose source port has no view attached.
    fn try_get(&self) -> Option<Self::Item> {
        Some(self.get())
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<V: SingletonView + ?Sized> SingletonView for RwLock<V> {
    type Item = V::Item;

    fn get(&self) -> Self::Item {
        self.read().unwrap().get()
    }

    fn try_get(&self) -> Option<Self::Item> {
        self.read().unwrap().try_get()
    }
}

impl<V: SingletonView + ?Sized> SingletonView for Arc<V> {
    type Item = V::Item;

    fn get(&self) -> Self::Item {
        self.deref().get()
    }

    fn try_get(&self) -> Option<Self::Item> {
        self.deref().try_get()
    }
}
