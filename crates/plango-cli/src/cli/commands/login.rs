//! Interactive login screen.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use plango_core::config::Config;
use plango_core::{CallbackAction, LoginOptions, PlaceholderCallbacks};

use crate::modes::{self, ScreenExit};

pub fn run(config: &Config, exit_on_login: bool) -> Result<()> {
    if !exit_on_login {
        modes::run_login_screen(config, &mut PlaceholderCallbacks)?;
        return Ok(());
    }

    let accepted = Rc::new(RefCell::new(None::<String>));
    let sink = Rc::clone(&accepted);
    let mut options = LoginOptions::new().with_login_success(move |email| {
        *sink.borrow_mut() = Some(email.to_string());
        CallbackAction::Exit
    });

    let exit = modes::run_login_screen(config, &mut options)?;
    if exit == ScreenExit::Completed
        && let Some(email) = accepted.borrow().as_deref()
    {
        println!("{email}");
    }
    Ok(())
}
