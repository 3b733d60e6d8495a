use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

#[test]
fn gate_starts_alive_and_stops() {
    let gate = PollGate::new();
    assert!(gate.is_alive());
    let clone = gate.clone();
    clone.stop();
    assert!(!gate.is_alive());
}

#[test]
fn ticks_on_mount_and_after_each_interval_until_stopped() {
    let gate = PollGate::new();
    let ticks = Rc::new(Cell::new(0u32));
    let sleeps = Rc::new(Cell::new(0u32));

    let stopper = gate.clone();
    let sleep_count = sleeps.clone();
    let tick_count = ticks.clone();
    block_on(drive_poll(
        &gate,
        Duration::from_millis(3000),
        move |d| {
            assert_eq!(d, Duration::from_millis(3000));
            sleep_count.set(sleep_count.get() + 1);
            // Unmount during the third wait.
            if sleep_count.get() == 3 {
                stopper.stop();
            }
            std::future::ready(())
        },
        move || tick_count.set(tick_count.get() + 1),
    ));

    assert_eq!(ticks.get(), 3);
    assert_eq!(sleeps.get(), 3);
}

#[test]
fn stopped_gate_never_ticks() {
    let gate = PollGate::new();
    gate.stop();
    let ticks = Rc::new(Cell::new(0u32));
    let tick_count = ticks.clone();
    block_on(drive_poll(&gate, Duration::from_millis(1), |_| std::future::ready(()), move || {
        tick_count.set(tick_count.get() + 1);
    }));
    assert_eq!(ticks.get(), 0);
}
