//! A stepper driving the tip screen.
//!
//! Presses happen on a worker thread; the two labels are only ever written
//! by the main loop, which is what a UI toolkit would require.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example stepper -- tip.toml
//! ```

use std::sync::{Arc, Mutex};
use std::thread;

use log::info;
use tipview::{
    view::{main_queue, Scheduler},
    TipCalculator, TipConfig, TipDisplayDelegate,
};

#[derive(Default)]
struct TipScreen {
    amount_label: Mutex<String>,
    percentage_label: Mutex<String>,
}

impl TipDisplayDelegate for TipScreen {
    fn did_change_tip_amount_text(&self, text: &str) {
        *self.amount_label.lock().unwrap() = text.to_string();
    }

    fn did_change_tip_percentage_text(&self, text: &str) {
        *self.percentage_label.lock().unwrap() = text.to_string();
        println!(
            "{:<24} {}",
            self.amount_label.lock().unwrap(),
            self.percentage_label.lock().unwrap()
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => TipConfig::load_from(path)?,
        None => TipConfig::default(),
    };
    info!("price before tip {:.2}", config.price_before_tip);

    let (queue, main_loop) = main_queue();
    let scheduler: Arc<dyn Scheduler> = Arc::new(queue);

    let calc = Arc::new(Mutex::new(TipCalculator::from_config(&config)?));
    let screen = Arc::new(TipScreen::default());
    let bag = calc
        .lock()
        .unwrap()
        .bind_delegate_on(scheduler, screen.clone());

    let stepper = {
        let calc = calc.clone();
        let step = config.stepper_step;
        thread::spawn(move || {
            for _ in 0..5 {
                calc.lock().unwrap().step_by(step);
            }
            calc.lock().unwrap().step_by(-step);
        })
    };

    stepper
        .join()
        .map_err(|_| anyhow::anyhow!("stepper thread panicked"))?;
    drop(bag);
    drop(calc);

    // every queue handle lives in the dropped subscriptions, so this ends
    let jobs = async_std::task::block_on(main_loop.run());
    info!("main loop processed {} label updates", jobs);
    Ok(())
}
