// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Switch Database Repository
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::gravity::GravityDatabase,
    services::switches::SwitchTarget,
    util::{Error, ErrorKind}
};
use diesel::prelude::*;
use failure::ResultExt;
use rocket::{
    request::{self, FromRequest},
    Outcome, Request
};
use std::marker::PhantomData;

#[cfg(test)]
use mock_it::Mock;

/// Describes interactions with the switch data store
pub trait SwitchRepository {
    /// Get the name of every row of the target's table, in table order.
    /// Duplicate names are returned as often as they appear.
    fn names(&self, target: SwitchTarget) -> Result<Vec<String>, Error>;

    /// Get the enabled flag of the first row matching the name. A name which
    /// matches no row is an explicit `None`, not an error.
    fn status(&self, target: SwitchTarget, name: &str) -> Result<Option<bool>, Error>;

    /// Set the enabled flag of the row matching the name. Exactly one row
    /// must match: zero matches fail with `NotFound` and two or more fail
    /// with `MultipleMatches`. No row is changed on failure.
    fn set_enabled(&self, target: SwitchTarget, name: &str, enabled: bool) -> Result<(), Error>;
}

/// The implementation of `SwitchRepository`
pub struct SwitchRepositoryImpl<'r> {
    db: GravityDatabase,
    phantom: PhantomData<&'r ()>
}

impl<'r> SwitchRepositoryImpl<'r> {
    fn new(db: GravityDatabase) -> Self {
        SwitchRepositoryImpl {
            db,
            phantom: PhantomData
        }
    }
}

impl<'a, 'r> FromRequest<'a, 'r> for SwitchRepositoryImpl<'r> {
    type Error = ();

    fn from_request(request: &'a Request<'r>) -> request::Outcome<Self, ()> {
        let db = request.guard::<GravityDatabase>()?;
        Outcome::Success(SwitchRepositoryImpl::new(db))
    }
}

impl<'r> SwitchRepository for SwitchRepositoryImpl<'r> {
    fn names(&self, target: SwitchTarget) -> Result<Vec<String>, Error> {
        let db = &self.db as &SqliteConnection;

        match target {
            SwitchTarget::Domain => {
                use crate::databases::gravity::domainlist::dsl::*;
                domainlist.select(domain).load(db)
            }
            SwitchTarget::Group => {
                use crate::databases::gravity::group::dsl::*;
                group.select(name).load(db)
            }
        }
        .context(ErrorKind::GravityDatabase)
        .map_err(Error::from)
    }

    fn status(&self, target: SwitchTarget, input_name: &str) -> Result<Option<bool>, Error> {
        let db = &self.db as &SqliteConnection;

        match target {
            SwitchTarget::Domain => {
                use crate::databases::gravity::domainlist::dsl::*;
                domainlist
                    .select(enabled)
                    .filter(domain.eq(input_name))
                    .first(db)
                    .optional()
            }
            SwitchTarget::Group => {
                use crate::databases::gravity::group::dsl::*;
                group
                    .select(enabled)
                    .filter(name.eq(input_name))
                    .first(db)
                    .optional()
            }
        }
        .context(ErrorKind::GravityDatabase)
        .map_err(Error::from)
    }

    fn set_enabled(
        &self,
        target: SwitchTarget,
        input_name: &str,
        value: bool
    ) -> Result<(), Error> {
        let db = &self.db as &SqliteConnection;

        match target {
            SwitchTarget::Domain => {
                use crate::databases::gravity::domainlist::dsl::*;

                let ids = domainlist
                    .select(id)
                    .filter(domain.eq(input_name))
                    .load::<i32>(db)
                    .context(ErrorKind::GravityDatabase)?;
                let row_id = single_match(&ids)?;

                diesel::update(domainlist.filter(id.eq(row_id)))
                    .set(enabled.eq(value))
                    .execute(db)
                    .context(ErrorKind::GravityDatabase)?;
            }
            SwitchTarget::Group => {
                use crate::databases::gravity::group::dsl::*;

                let ids = group
                    .select(id)
                    .filter(name.eq(input_name))
                    .load::<i32>(db)
                    .context(ErrorKind::GravityDatabase)?;
                let row_id = single_match(&ids)?;

                diesel::update(group.filter(id.eq(row_id)))
                    .set(enabled.eq(value))
                    .execute(db)
                    .context(ErrorKind::GravityDatabase)?;
            }
        }

        Ok(())
    }
}

/// Apply the exactly-one-match contract to the row ids found for a name
fn single_match(ids: &[i32]) -> Result<i32, Error> {
    match ids {
        [] => Err(Error::from(ErrorKind::NotFound)),
        [row_id] => Ok(*row_id),
        _ => Err(Error::from(ErrorKind::MultipleMatches))
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct SwitchRepositoryMock {
    pub names: Mock<SwitchTarget, Result<Vec<String>, Error>>,
    pub status: Mock<(SwitchTarget, String), Result<Option<bool>, Error>>,
    pub set_enabled: Mock<(SwitchTarget, String, bool), Result<(), Error>>
}

#[cfg(test)]
impl Default for SwitchRepositoryMock {
    fn default() -> Self {
        SwitchRepositoryMock {
            names: Mock::new(Ok(Vec::new())),
            status: Mock::new(Ok(None)),
            set_enabled: Mock::new(Ok(()))
        }
    }
}

#[cfg(test)]
impl SwitchRepository for SwitchRepositoryMock {
    fn names(&self, target: SwitchTarget) -> Result<Vec<String>, Error> {
        self.names.called(target)
    }

    fn status(&self, target: SwitchTarget, name: &str) -> Result<Option<bool>, Error> {
        self.status.called((target, name.to_owned()))
    }

    fn set_enabled(&self, target: SwitchTarget, name: &str, enabled: bool) -> Result<(), Error> {
        self.set_enabled.called((target, name.to_owned(), enabled))
    }
}
