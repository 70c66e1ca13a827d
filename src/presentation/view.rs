use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{domain::OrgId, form::FormState};

use super::components::{render_footer, render_modal, render_page};

pub struct UiContext<'a> {
    pub org: Option<&'a OrgId>,
    pub has_existing: bool,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub modal: Option<ModalRender<'a>>,
}

pub struct ModalRender<'a> {
    pub title: &'a str,
    pub submit_label: &'a str,
    pub form: &'a FormState,
    pub submitting: bool,
    pub dirty: bool,
    pub error_count: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(2)])
        .split(frame.area());

    render_page(frame, chunks[0], &ctx);
    render_footer(frame, chunks[1], &ctx);

    if let Some(modal) = &ctx.modal {
        render_modal(frame, modal);
    }
}
