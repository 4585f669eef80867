use {
    crate::{
        tip::calculator::TipCalculator,
        view::{subscription::DisposeBag, Scheduler},
    },
    std::sync::Arc,
};

/// Callback-style receiver for the two display strings.
///
/// Implement this on whatever owns the labels when closures are not a
/// good fit. It is driven by the same subscriptions as the closure API.
pub trait TipDisplayDelegate: Send + Sync {
    fn did_change_tip_amount_text(&self, text: &str);
    fn did_change_tip_percentage_text(&self, text: &str);
}

impl TipCalculator {
    /// Routes both strings into `delegate`, starting with the current ones.
    /// The delegate stays bound for as long as the returned bag lives.
    pub fn bind_delegate<D: TipDisplayDelegate + 'static>(&self, delegate: Arc<D>) -> DisposeBag {
        let mut bag = DisposeBag::new();

        let d = delegate.clone();
        self.observe_amount_text()
            .subscribe(move |text| d.did_change_tip_amount_text(&text))
            .disposed_by(&mut bag);
        self.observe_percentage_text()
            .subscribe(move |text| delegate.did_change_tip_percentage_text(&text))
            .disposed_by(&mut bag);

        bag
    }

    /// Like [`bind_delegate`](Self::bind_delegate), delivering through `scheduler`.
    pub fn bind_delegate_on<D: TipDisplayDelegate + 'static>(
        &self,
        scheduler: Arc<dyn Scheduler>,
        delegate: Arc<D>,
    ) -> DisposeBag {
        let mut bag = DisposeBag::new();

        let d = delegate.clone();
        self.observe_amount_text()
            .subscribe_on(scheduler.clone(), move |text| d.did_change_tip_amount_text(&text))
            .disposed_by(&mut bag);
        self.observe_percentage_text()
            .subscribe_on(scheduler, move |text| {
                delegate.did_change_tip_percentage_text(&text)
            })
            .disposed_by(&mut bag);

        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::main_queue;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Labels {
        calls: Mutex<Vec<(&'static str, String)>>,
    }

    impl TipDisplayDelegate for Labels {
        fn did_change_tip_amount_text(&self, text: &str) {
            self.calls.lock().unwrap().push(("amount", text.to_string()));
        }

        fn did_change_tip_percentage_text(&self, text: &str) {
            self.calls.lock().unwrap().push(("percentage", text.to_string()));
        }
    }

    fn call(kind: &'static str, text: &str) -> (&'static str, String) {
        (kind, text.to_string())
    }

    #[test]
    fn delegate_gets_amount_then_percentage() {
        let mut calc = TipCalculator::new(20.0).unwrap();
        let labels = Arc::new(Labels::default());
        let bag = calc.bind_delegate(labels.clone());
        assert_eq!(bag.len(), 2);

        calc.set_tip_amount(4.0);

        assert_eq!(
            *labels.calls.lock().unwrap(),
            vec![
                call("amount", "Tip Amount: $0.00"),
                call("percentage", "0.00 %"),
                call("amount", "Tip Amount: $4.00"),
                call("percentage", "20.00 %"),
            ]
        );
    }

    #[test]
    fn unbound_delegate_is_quiet() {
        let mut calc = TipCalculator::new(20.0).unwrap();
        let labels = Arc::new(Labels::default());
        let bag = calc.bind_delegate(labels.clone());
        drop(bag);

        calc.set_tip_amount(1.0);
        assert_eq!(labels.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn delegate_on_main_queue() {
        let (queue, main) = main_queue();
        let mut calc = TipCalculator::new(10.0).unwrap();
        let labels = Arc::new(Labels::default());
        let _bag = calc.bind_delegate_on(Arc::new(queue), labels.clone());

        calc.set_tip_amount(1.0);
        assert!(labels.calls.lock().unwrap().is_empty());

        assert_eq!(main.drain(), 4);
        assert_eq!(
            labels.calls.lock().unwrap().last(),
            Some(&call("percentage", "10.00 %"))
        );
    }
}
