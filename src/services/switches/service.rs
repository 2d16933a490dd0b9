// Pi-hole: A black hole for Internet advertisements
// (c) 2020 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Switch API
// Switch Service
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    services::{
        restart::{RestartService, RestartServiceImpl},
        switches::{SwitchRepository, SwitchRepositoryImpl, SwitchTarget}
    },
    util::{Error, ErrorKind}
};
use rocket::{
    request::{self, FromRequest},
    Outcome, Request
};

/// Describes the operations behind the switch endpoints
pub trait SwitchService {
    /// Get the names of all switches of the target kind
    fn names(&self, target: SwitchTarget) -> Result<Vec<String>, Error>;

    /// Get the enabled flag of the named switch, or `None` when it does not
    /// exist
    fn status(&self, target: SwitchTarget, name: &str) -> Result<Option<bool>, Error>;

    /// Flip the named switch. Domain toggles additionally trigger a DNS
    /// restart after the row update is committed.
    fn set_enabled(&self, target: SwitchTarget, name: &str, enabled: bool) -> Result<(), Error>;
}

/// The implementation of `SwitchService`
pub struct SwitchServiceImpl<'r> {
    repo: Box<dyn SwitchRepository + 'r>,
    restart: Box<dyn RestartService + 'r>
}

impl<'a, 'r> FromRequest<'a, 'r> for SwitchServiceImpl<'r> {
    type Error = ();

    fn from_request(request: &'a Request<'r>) -> request::Outcome<Self, ()> {
        let repo = request.guard::<SwitchRepositoryImpl<'r>>()?;
        let restart = request.guard::<RestartServiceImpl<'r>>()?;

        Outcome::Success(SwitchServiceImpl {
            repo: Box::new(repo),
            restart: Box::new(restart)
        })
    }
}

impl<'r> SwitchService for SwitchServiceImpl<'r> {
    fn names(&self, target: SwitchTarget) -> Result<Vec<String>, Error> {
        self.repo.names(target)
    }

    fn status(&self, target: SwitchTarget, name: &str) -> Result<Option<bool>, Error> {
        self.repo.status(target, name)
    }

    fn set_enabled(&self, target: SwitchTarget, name: &str, enabled: bool) -> Result<(), Error> {
        self.repo.set_enabled(target, name, enabled)?;

        // Only domain toggles restart the DNS server. The row update is
        // already committed at this point, so a restart failure is logged
        // instead of failing the toggle.
        if target == SwitchTarget::Domain {
            if let Err(e) = self.restart.restart_dns(None, None) {
                if e.kind() != ErrorKind::RestartNotConfigured {
                    e.print_stacktrace();
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{SwitchService, SwitchServiceImpl};
    use crate::{
        services::{
            restart::RestartService,
            switches::{SwitchRepositoryMock, SwitchTarget}
        },
        util::{Error, ErrorKind}
    };
    use mock_it::verify;
    use std::{cell::RefCell, rc::Rc};

    /// Records restart calls and returns a canned result
    #[derive(Clone)]
    struct RestartServiceSpy {
        calls: Rc<RefCell<Vec<(Option<String>, Option<String>)>>>,
        error: Option<ErrorKind>
    }

    impl RestartServiceSpy {
        fn new(error: Option<ErrorKind>) -> Self {
            RestartServiceSpy {
                calls: Rc::new(RefCell::new(Vec::new())),
                error
            }
        }

        fn calls(&self) -> Vec<(Option<String>, Option<String>)> {
            self.calls.borrow().clone()
        }
    }

    impl RestartService for RestartServiceSpy {
        fn restart_dns(&self, url: Option<&str>, auth: Option<&str>) -> Result<(), Error> {
            self.calls
                .borrow_mut()
                .push((url.map(str::to_owned), auth.map(str::to_owned)));

            match &self.error {
                Some(kind) => Err(Error::from(kind.clone())),
                None => Ok(())
            }
        }
    }

    /// A domain toggle restarts the DNS server once, with the configured
    /// restart parameters
    #[test]
    fn domain_toggle_restarts_dns() {
        let repo = SwitchRepositoryMock::default();
        repo.set_enabled
            .given((SwitchTarget::Domain, "ads.example.com".to_owned(), false))
            .will_return(Ok(()));

        let restart = RestartServiceSpy::new(None);
        let service = SwitchServiceImpl {
            repo: Box::new(repo.clone()),
            restart: Box::new(restart.clone())
        };

        service
            .set_enabled(SwitchTarget::Domain, "ads.example.com", false)
            .unwrap();

        verify(repo.set_enabled.was_called_with((
            SwitchTarget::Domain,
            "ads.example.com".to_owned(),
            false
        )));
        assert_eq!(restart.calls(), vec![(None, None)]);
    }

    /// A group toggle does not restart the DNS server
    #[test]
    fn group_toggle_does_not_restart_dns() {
        let repo = SwitchRepositoryMock::default();
        repo.set_enabled
            .given((SwitchTarget::Group, "Kids".to_owned(), false))
            .will_return(Ok(()));

        let restart = RestartServiceSpy::new(None);
        let service = SwitchServiceImpl {
            repo: Box::new(repo.clone()),
            restart: Box::new(restart.clone())
        };

        service
            .set_enabled(SwitchTarget::Group, "Kids", false)
            .unwrap();

        assert!(restart.calls().is_empty());
    }

    /// A failed restart does not fail the committed toggle
    #[test]
    fn restart_failure_does_not_fail_toggle() {
        let repo = SwitchRepositoryMock::default();
        repo.set_enabled
            .given((SwitchTarget::Domain, "ads.example.com".to_owned(), true))
            .will_return(Ok(()));

        let restart = RestartServiceSpy::new(Some(ErrorKind::RestartCreateFailed));
        let service = SwitchServiceImpl {
            repo: Box::new(repo.clone()),
            restart: Box::new(restart.clone())
        };

        service
            .set_enabled(SwitchTarget::Domain, "ads.example.com", true)
            .unwrap();

        assert_eq!(restart.calls().len(), 1);
    }

    /// A failed toggle does not trigger a restart
    #[test]
    fn failed_toggle_does_not_restart_dns() {
        let repo = SwitchRepositoryMock::default();
        repo.set_enabled
            .given((SwitchTarget::Domain, "missing.example.com".to_owned(), true))
            .will_return(Err(Error::from(ErrorKind::NotFound)));

        let restart = RestartServiceSpy::new(None);
        let service = SwitchServiceImpl {
            repo: Box::new(repo.clone()),
            restart: Box::new(restart.clone())
        };

        let error = service
            .set_enabled(SwitchTarget::Domain, "missing.example.com", true)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(restart.calls().is_empty());
    }
}
