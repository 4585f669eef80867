use {
    crate::view::{
        singleton::SingletonView, Observer, ObserverBroadcast, OuterViewPort, View, ViewPort,
    },
    std::sync::Arc,
    std::sync::RwLock,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<Item: 'static> OuterViewPort<dyn SingletonView<Item = Item>> {
    /// Derives a port whose value is always `f` applied to the current
    /// source value. `f` runs on every `get()`, so it should be pure.
    ///
    /// Changes of the source are pushed through to observers of the
    /// derived port before the source's own notification returns.
    ///
    /// Until the source port has a view, `try_get()` on the derived view
    /// yields `None` and subscribers are not called; `get()` panics.
    pub fn map<DstItem: 'static, F: Fn(Item) -> DstItem + Send + Sync + 'static>(
        &self,
        f: F,
    ) -> OuterViewPort<dyn SingletonView<Item = DstItem>> {
        let port: ViewPort<dyn SingletonView<Item = DstItem>> = ViewPort::new();
        port.add_update_hook(Arc::new(self.0.clone()));

        let src_view: Arc<RwLock<Option<Arc<dyn SingletonView<Item = Item>>>>> =
            Arc::new(RwLock::new(None));

        let map = Arc::new(RwLock::new(MapSingleton {
            src_view: src_view.clone(),
            cast: port.inner().get_broadcast(),
        }));

        self.add_observer(map.clone());
        port.inner().set_view(Some(Arc::new(MapSingletonView {
            src_view,
            f,
            _observer: map,
        })));
        port.into_outer()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Read side of a mapped singleton.
///
/// Kept apart from [`MapSingleton`] so that observers reading the derived
/// value during delivery never contend with the observer's own lock.
/// The source port holds the observer only weakly; this view keeps it alive.
pub struct MapSingletonView<SrcView: ?Sized, F> {
    src_view: Arc<RwLock<Option<Arc<SrcView>>>>,
    f: F,
    _observer: Arc<dyn std::any::Any + Send + Sync>,
}

impl<SrcView, F> View for MapSingletonView<SrcView, F>
where
    SrcView: SingletonView + ?Sized,
    F: Send + Sync,
{
    type Msg = ();
}

impl<DstItem, SrcView, F> SingletonView for MapSingletonView<SrcView, F>
where
    SrcView: SingletonView + ?Sized,
    F: Fn(SrcView::Item) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn get(&self) -> DstItem {
        self.try_get()
            .expect("mapped port read before its source has a view")
    }

    fn try_get(&self) -> Option<DstItem> {
        let src = self.src_view.read().unwrap().clone()?;
        src.try_get().map(&self.f)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Observer side of a mapped singleton: tracks the source and
/// forwards its notifications to the derived port.
pub struct MapSingleton<DstItem, SrcView: ?Sized> {
    src_view: Arc<RwLock<Option<Arc<SrcView>>>>,
    cast: Arc<RwLock<ObserverBroadcast<dyn SingletonView<Item = DstItem>>>>,
}

impl<DstItem, SrcView> MapSingleton<DstItem, SrcView>
where
    DstItem: 'static,
    SrcView: SingletonView + ?Sized,
{
    fn forward(&mut self) {
        self.cast.notify(&());
        self.cast.read().unwrap().update();
    }
}

impl<DstItem, SrcView> Observer<SrcView> for MapSingleton<DstItem, SrcView>
where
    DstItem: 'static,
    SrcView: SingletonView + ?Sized,
{
    fn reset(&mut self, view: Option<Arc<SrcView>>) {
        *self.src_view.write().unwrap() = view;
        self.forward();
    }

    fn notify(&mut self, _msg: &()) {
        self.forward();
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
