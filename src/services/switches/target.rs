// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Switch Target Structure
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

/// The kinds of gravity database rows which can be toggled. Domains and
/// groups share all of their switch logic, so operations are parameterized by
/// the target instead of being duplicated per table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwitchTarget {
    /// A row of the `domainlist` table, keyed by its `domain` column
    Domain,
    /// A row of the `group` table, keyed by its `name` column
    Group
}
