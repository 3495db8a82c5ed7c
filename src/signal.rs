use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};

static CHILD_HAS_CONTROL: AtomicBool = AtomicBool::new(false);
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// After this call Ctrl+C belongs to the child; the runner stays alive only
/// to collect the child's exit status and pass it through.
pub fn pass_control_to_child() {
    CHILD_HAS_CONTROL.store(true, Ordering::SeqCst);
}

pub fn setup_signal_handler() {
    let result = ctrlc::set_handler(|| {
        if !CHILD_HAS_CONTROL.load(Ordering::SeqCst) {
            exit(INTERRUPTED_EXIT_CODE);
        }
    });

    if result.is_err() {
        eprintln!("pyrun: unable to set the Ctrl+C handler, SIGINT will not be handled correctly");
    }
}
