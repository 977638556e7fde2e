use severity_chain::Scenario;

fn main() {
    // Routing failures are part of the demo and already reported on stdout.
    if let Err(e) = Scenario::new().run() {
        eprintln!("[CHAIN ERROR] Failed to write report: {}", e);
    }
}
