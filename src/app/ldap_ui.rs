use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::{
    api::{DirectoryApi, NotificationSink},
    domain::{LdapConfigRecord, OrgId},
    presentation,
};

use super::{controller::LdapModal, options::UiOptions};

/// Terminal front door: wires the controller to a raw-mode terminal and runs
/// the event loop until the user quits. Returns the last record written
/// through a successful submit, if any.
pub struct LdapUi<A: DirectoryApi, N: NotificationSink> {
    api: A,
    notifier: N,
    org: Option<OrgId>,
    options: UiOptions,
}

impl<A: DirectoryApi, N: NotificationSink> LdapUi<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            org: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_org(mut self, org: OrgId) -> Self {
        self.org = Some(org);
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<Option<LdapConfigRecord>> {
        let tick_rate = self.options.tick_rate;
        let mut modal = LdapModal::new(
            &self.api,
            &self.notifier,
            self.org.clone(),
            self.options.clone(),
        )?;

        // ratatui::init installs its own panic hook, so the console is
        // restored on every exit path.
        let mut terminal = ratatui::init();
        let result = Self::event_loop(&mut terminal, &mut modal, tick_rate);
        ratatui::restore();
        result.map(|()| modal.into_last_saved())
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        modal: &mut LdapModal<'_, A, N>,
        tick_rate: Duration,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| presentation::draw(frame, modal.ui_context()))?;
            if !event::poll(tick_rate)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(
                        key.code,
                        KeyCode::Char('q')
                            | KeyCode::Char('Q')
                            | KeyCode::Char('c')
                            | KeyCode::Char('C')
                    )
                {
                    return Ok(());
                }
                modal.handle_key(key);
            }
        }
    }
}
