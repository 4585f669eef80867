//! Replay buffers and constant ports.

use log::info;
use tipview::{
    buffer::{replay::ReplayBuffer, singleton::just},
    TipConfig,
};

fn main() {
    env_logger::init();

    let hello = just("Hello reactive views");
    let _greeting = hello.subscribe(|s| println!("{}", s));

    let mut subject = ReplayBuffer::new(TipConfig::default().replay_capacity);
    subject.push("Initial Message 1".to_string());

    let _sub = subject
        .get_port()
        .subscribe(|s| println!("The new string is {}", s));

    subject.push("Hello".to_string());
    subject.push("World!".to_string());

    info!("history: {:?}", subject.history());
}
