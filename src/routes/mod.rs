// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// API Routes
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

pub mod restart;
pub mod switches;
pub mod version;
