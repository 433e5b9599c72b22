use anyhow::Result;
use bizdash_core::{LocalAuth, SessionContext};

use crate::config::Config;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_session;

pub fn handle<R: Renderer>(config: &Config, renderer: &R) -> Result<()> {
    let auth = LocalAuth::new(config.session.session());
    let context = SessionContext::init(&auth);
    let session = context.current();
    context.teardown(&auth);

    renderer.render(present_session(session))
}
