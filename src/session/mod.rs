//! Line-oriented driver for the controllers.
//!
//! Each input line is one UI event. The session forwards it to the matching
//! controller and returns the re-rendered views, which lets the whole site
//! behavior be exercised from a terminal or a script.

use crate::controllers::{ContactFormController, NavController, SubmitOutcome};
use crate::domain::FormField;
use crate::models::NavLink;
use crate::view::{FormView, NavView};
use std::fmt::Write as _;
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  type <field> <value>   edit name|email|phone|message
  key <field> <key>      check whether a key press reaches a field
  blur <field>           leave a field
  submit                 submit the contact form
  toggle                 click the menu button
  escape                 press Escape
  overlay                click the overlay behind the menu
  link <route>           click a navigation link, e.g. /about-us
  scroll <offset>        scroll the page to a vertical offset
  show                   render the current views
  metrics                print submission metrics
  help                   show this text
  quit                   exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Type { field: FormField, value: String },
    Key { field: FormField, key: String },
    Blur(FormField),
    Submit,
    Toggle,
    Escape,
    Overlay,
    Link(NavLink),
    Scroll(f64),
    Show,
    Metrics,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim_start();

        match verb {
            "type" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Command::Type {
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "key" => {
                let (field, key) = rest
                    .split_once(' ')
                    .ok_or_else(|| "usage: key <field> <key>".to_string())?;
                Ok(Command::Key {
                    field: field.parse()?,
                    key: key.trim().to_string(),
                })
            }
            "blur" => Ok(Command::Blur(rest.parse()?)),
            "submit" => Ok(Command::Submit),
            "toggle" => Ok(Command::Toggle),
            "escape" => Ok(Command::Escape),
            "overlay" => Ok(Command::Overlay),
            "link" => Ok(Command::Link(rest.parse()?)),
            "scroll" => rest
                .trim()
                .parse::<f64>()
                .map(Command::Scroll)
                .map_err(|_| format!("Invalid scroll offset: {}", rest)),
            "show" => Ok(Command::Show),
            "metrics" => Ok(Command::Metrics),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// What the driver should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Both controllers of a single page view.
#[derive(Debug)]
pub struct Session {
    form: ContactFormController,
    nav: NavController,
}

impl Session {
    pub fn new(form: ContactFormController, nav: NavController) -> Self {
        Self { form, nav }
    }

    pub fn form(&self) -> &ContactFormController {
        &self.form
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    /// Apply one command and describe the result.
    pub async fn handle(&mut self, command: Command) -> Reply {
        let mut out = String::new();

        match command {
            Command::Type { field, value } => self.form.change(field, &value),
            Command::Key { field, key } => {
                let verdict = if self.form.key_down(field, &key) {
                    "accepted"
                } else {
                    "blocked"
                };
                let _ = writeln!(out, "key {:?} {} by {}", key, verdict, field);
            }
            Command::Blur(field) => self.form.blur(field),
            Command::Submit => {
                let summary = match self.form.submit().await {
                    SubmitOutcome::Invalid(errors) => {
                        format!("not sent: {} field(s) need attention", errors.len())
                    }
                    SubmitOutcome::AlreadySubmitting => "already submitting".to_string(),
                    SubmitOutcome::Sent => "sent".to_string(),
                    SubmitOutcome::Failed { message } => format!("failed: {}", message),
                    SubmitOutcome::Discarded => "discarded".to_string(),
                };
                let _ = writeln!(out, "{}", summary);
            }
            Command::Toggle => self.nav.toggle(),
            Command::Escape => {
                self.nav.key_down("Escape");
            }
            Command::Overlay => self.nav.click_overlay(),
            Command::Link(link) => {
                let route = self.nav.activate_link(link);
                let _ = writeln!(out, "navigate {}", route);
            }
            Command::Scroll(offset) => self.nav.scroll(offset),
            Command::Show => {}
            Command::Metrics => {
                return Reply::Output(format!("{}\n", self.form.metrics().summary()));
            }
            Command::Help => return Reply::Output(format!("{}\n", HELP)),
            Command::Quit => return Reply::Quit,
        }

        out.push_str(&self.render());
        Reply::Output(out)
    }

    /// Current views as text.
    pub fn render(&self) -> String {
        format!(
            "{}{}",
            NavView::derive(self.nav.state()),
            FormView::derive(&self.form.snapshot())
        )
    }

    /// Tear down both controllers.
    pub fn close(self) {
        self.form.unmount();
        drop(self.nav);
    }
}
