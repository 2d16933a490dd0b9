// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Gravity Database Schema
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

table! {
    domainlist (id) {
        id -> Integer,
        #[sql_name = "type"]
        kind -> Integer,
        domain -> Text,
        enabled -> Bool,
        date_added -> Integer,
        date_modified -> Integer,
        comment -> Nullable<Text>,
    }
}

table! {
    domainlist_by_group (domainlist_id, group_id) {
        domainlist_id -> Integer,
        group_id -> Integer,
    }
}

table! {
    group (id) {
        id -> Integer,
        enabled -> Bool,
        name -> Text,
        description -> Nullable<Text>,
    }
}

joinable!(domainlist_by_group -> domainlist (domainlist_id));
joinable!(domainlist_by_group -> group (group_id));

allow_tables_to_appear_in_same_query!(domainlist, domainlist_by_group, group,);
