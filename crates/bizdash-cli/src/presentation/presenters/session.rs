use bizdash_core::Session;

use crate::presentation::view_models::{CommandResultViewModel, Guidance, SessionViewModel};

pub fn present_session(session: Option<Session>) -> CommandResultViewModel<SessionViewModel> {
    match session {
        Some(session) => CommandResultViewModel::new(SessionViewModel {
            signed_in: true,
            user: Some(session.user),
            roles: session.roles,
        }),
        None => CommandResultViewModel::new(SessionViewModel {
            signed_in: false,
            user: None,
            roles: Vec::new(),
        })
        .with_suggestion(Guidance::new(
            "Set [session] user = \"...\" in config.toml to sign in",
        )),
    }
}
