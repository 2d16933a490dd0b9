// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Program Entry Point
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

fn main() {
    if let Err(e) = pihole_switch_api::handle_cli() {
        e.print_stacktrace();
        std::process::exit(1);
    }
}
