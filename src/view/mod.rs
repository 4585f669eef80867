
                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                   View
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
/// Something that can be observed.
///
/// Observers are told *that* the view changed through `Msg`
/// and then read whatever they need from the view itself.
pub trait View: Send + Sync {
    /// Notification message for the observers
    type Msg: Send + Sync;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

use std::sync::{Arc, RwLock};

impl<V: View + ?Sized> View for RwLock<V> {
    type Msg = V::Msg;
}

impl<V: View + ?Sized> View for Arc<V> {
    type Msg = V::Msg;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub mod channel;
pub mod observer;
pub mod port;
pub mod scheduler;
pub mod subscription;

pub use {
    channel::{queue_channel, QueueReceiver, QueueSender},
    observer::{NotifyFnObserver, Observer, ObserverBroadcast},
    port::{InnerViewPort, OuterViewPort, UpdateTask, ViewPort},
    scheduler::{main_queue, ImmediateScheduler, Job, MainLoop, MainQueue, Scheduler},
    subscription::{DisposeBag, Subscription},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub mod singleton;
pub mod replay;
