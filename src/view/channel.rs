use {
    async_std::stream::Stream,
    core::{
        pin::Pin,
        task::{Context, Poll, Waker},
    },
    std::{
        sync::{Arc, Mutex},
        vec,
    },
};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
               Queue Channel
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/
struct QueueState<T> {
    pending: Vec<T>,
    draining: Option<vec::IntoIter<T>>,
    num_senders: usize,
    waker: Option<Waker>,
}

impl<T> QueueState<T> {
    fn wake(&mut self) {
        if let Some(waker) = self.waker.take() {
            waker.wake();
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Sending half of a queue channel.
///
/// Messages are appended in order and picked up in batches by the receiver.
pub struct QueueSender<T>(Arc<Mutex<QueueState<T>>>);

/// Receiving half of a queue channel.
pub struct QueueReceiver<T>(Arc<Mutex<QueueState<T>>>);

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<T: Send + Sync> QueueSender<T> {
    pub fn send(&self, msg: T) {
        let mut state = self.0.lock().unwrap();
        state.pending.push(msg);
        state.wake();
    }
}

impl<T> Clone for QueueSender<T> {
    fn clone(&self) -> Self {
        self.0.lock().unwrap().num_senders += 1;
        QueueSender(self.0.clone())
    }
}

impl<T> Drop for QueueSender<T> {
    fn drop(&mut self) {
        let mut state = self.0.lock().unwrap();
        state.num_senders -= 1;
        state.wake();
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<T> QueueReceiver<T> {
    /// Waits for the next batch.
    /// Returns `None` once the queue is empty and all senders are gone.
    pub async fn recv(&self) -> Option<Vec<T>> {
        QueueRead(self.0.clone()).await
    }

    /// Takes everything queued so far, without waiting.
    pub fn try_recv(&self) -> Option<Vec<T>> {
        let mut state = self.0.lock().unwrap();
        if state.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut state.pending))
        }
    }

    pub fn is_closed(&self) -> bool {
        self.0.lock().unwrap().num_senders == 0
    }
}

struct QueueRead<T>(Arc<Mutex<QueueState<T>>>);

impl<T> std::future::Future for QueueRead<T> {
    type Output = Option<Vec<T>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context) -> Poll<Self::Output> {
        let mut state = self.0.lock().unwrap();
        if !state.pending.is_empty() {
            Poll::Ready(Some(std::mem::take(&mut state.pending)))
        } else if state.num_senders == 0 {
            Poll::Ready(None)
        } else {
            state.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<T> Stream for QueueReceiver<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut state = self.0.lock().unwrap();

        if let Some(draining) = state.draining.as_mut() {
            if let Some(val) = draining.next() {
                return Poll::Ready(Some(val));
            }
            state.draining = None;
        }

        if !state.pending.is_empty() {
            let mut batch = std::mem::take(&mut state.pending).into_iter();
            let first = batch.next();
            state.draining = Some(batch);
            Poll::Ready(first)
        } else if state.num_senders == 0 {
            Poll::Ready(None)
        } else {
            state.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub fn queue_channel<T: Send + Sync>() -> (QueueSender<T>, QueueReceiver<T>) {
    let state = Arc::new(Mutex::new(QueueState {
        pending: Vec::new(),
        draining: None,
        num_senders: 1,
        waker: None,
    }));

    (QueueSender(state.clone()), QueueReceiver(state))
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::view::channel::*;
    use async_std::stream::StreamExt;

    #[test]
    fn queue_keeps_order() {
        let (tx, rx) = queue_channel::<u32>();
        assert_eq!(rx.try_recv(), None);

        tx.send(1);
        tx.send(2);
        tx.send(3);

        assert_eq!(rx.try_recv(), Some(vec![1, 2, 3]));
        assert_eq!(rx.try_recv(), None);
    }

    #[test]
    fn recv_ends_when_senders_are_gone() {
        let (tx, rx) = queue_channel::<&'static str>();
        let tx2 = tx.clone();

        tx.send("a");
        drop(tx);
        tx2.send("b");
        drop(tx2);

        assert!(rx.is_closed());
        async_std::task::block_on(async {
            assert_eq!(rx.recv().await, Some(vec!["a", "b"]));
            assert_eq!(rx.recv().await, None);
        });
    }

    #[test]
    fn stream_flattens_batches() {
        let (tx, mut rx) = queue_channel::<char>();
        tx.send('x');
        tx.send('y');
        drop(tx);

        let items = async_std::task::block_on(async {
            let mut items = Vec::new();
            while let Some(c) = rx.next().await {
                items.push(c);
            }
            items
        });
        assert_eq!(items, vec!['x', 'y']);
    }
}
