use crate::labels::Labels;
use crate::order::Flavor;
use crate::session::{OrderSession, SessionError};
use crate::share::ShareSink;
use crate::ui::mvi::Reducer;
use crate::ui::options::{OptionListIntent, OptionListReducer, OptionListState};
use crate::wizard::Step;
use std::cell::Cell;
use std::rc::Rc;

/// One-line message under the step body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal front end for one order session.
///
/// Translates key-level actions into session calls and keeps the
/// screen-local option focus in sync with the current step.
pub struct App {
    session: OrderSession,
    labels: Box<dyn Labels>,
    sink: Box<dyn ShareSink>,
    quantity_options: Vec<u32>,
    options: OptionListState,
    status: Option<StatusLine>,
    should_quit: bool,
    /// Set by the session change hook and by local UI changes.
    redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(
        mut session: OrderSession,
        labels: Box<dyn Labels>,
        sink: Box<dyn ShareSink>,
        quantity_options: Vec<u32>,
    ) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        session.subscribe(move |_| flag.set(true));

        let mut app = Self {
            session,
            labels,
            sink,
            quantity_options,
            options: OptionListState::default(),
            status: None,
            should_quit: false,
            redraw,
        };
        app.reload_options();
        app
    }

    pub fn session(&self) -> &OrderSession {
        &self.session
    }

    pub fn labels(&self) -> &dyn Labels {
        self.labels.as_ref()
    }

    pub fn options(&self) -> OptionListState {
        self.options
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// True when something changed since the last call.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn mark_dirty(&self) {
        self.redraw.set(true);
    }

    /// Display text for each row of the current step's list.
    pub fn option_labels(&self) -> Vec<String> {
        match self.session.current_step() {
            Step::Start => self
                .quantity_options
                .iter()
                .map(|&count| self.labels.quantity(count))
                .collect(),
            Step::Flavor => Flavor::ALL
                .iter()
                .map(|&flavor| self.labels.flavor_name(flavor).to_string())
                .collect(),
            Step::Pickup => self.session.order().pickup_options().to_vec(),
            Step::Summary => Vec::new(),
        }
    }

    /// Row matching the value already stored in the order, if any.
    pub fn chosen_index(&self) -> Option<usize> {
        let order = self.session.order();
        match self.session.current_step() {
            Step::Start => {
                let quantity = order.quantity()?;
                self.quantity_options.iter().position(|&q| q == quantity)
            }
            Step::Flavor => {
                let flavor = order.flavor()?;
                Flavor::ALL.iter().position(|&f| f == flavor)
            }
            Step::Pickup => {
                let date = order.pickup_date()?;
                order.pickup_options().iter().position(|d| d == date)
            }
            Step::Summary => None,
        }
    }

    pub fn move_up(&mut self) {
        dispatch_mvi!(self, options, OptionListReducer, OptionListIntent::MoveUp);
        self.mark_dirty();
    }

    pub fn move_down(&mut self) {
        dispatch_mvi!(self, options, OptionListReducer, OptionListIntent::MoveDown);
        self.mark_dirty();
    }

    /// Choose the focused row without leaving the step.
    pub fn select(&mut self) {
        let result = self.select_focused();
        self.report(result);
    }

    /// Choose the focused row and move on; on the summary step, share.
    pub fn confirm(&mut self) {
        match self.session.current_step() {
            Step::Start => {
                let Some(quantity) = self
                    .options
                    .focused()
                    .and_then(|i| self.quantity_options.get(i).copied())
                else {
                    return;
                };
                let result = self.session.choose_quantity(quantity).map(|_| ());
                self.after_navigation(result);
            }
            Step::Flavor | Step::Pickup => {
                let result = self
                    .select_focused()
                    .and_then(|()| self.session.next().map(|_| ()));
                self.after_navigation(result);
            }
            Step::Summary => self.share(),
        }
    }

    pub fn back(&mut self) {
        let result = self.session.back().map(|_| ());
        self.after_navigation(result);
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
        self.after_navigation(Ok(()));
    }

    pub fn share(&mut self) {
        let result = self
            .session
            .share(self.sink.as_mut(), self.labels.as_ref())
            .map(|_| ());
        match result {
            Ok(()) => {
                let mut text = format!("Order sent to {}", self.sink.name());
                if let Some(hint) = self.sink.hint() {
                    text.push_str(". ");
                    text.push_str(hint);
                }
                self.status = Some(StatusLine {
                    text,
                    is_error: false,
                });
                self.mark_dirty();
            }
            Err(err) => self.report(Err(err)),
        }
    }

    fn select_focused(&mut self) -> Result<(), SessionError> {
        let Some(index) = self.options.focused() else {
            return Ok(());
        };
        match self.session.current_step() {
            Step::Flavor => {
                let Some(flavor) = Flavor::ALL.get(index) else {
                    return Ok(());
                };
                self.session.choose_flavor(flavor.id())
            }
            Step::Pickup => {
                let Some(date) = self.session.order().pickup_options().get(index).cloned() else {
                    return Ok(());
                };
                self.session.choose_date(&date)
            }
            Step::Start | Step::Summary => Ok(()),
        }
    }

    fn after_navigation(&mut self, result: Result<(), SessionError>) {
        if result.is_ok() {
            self.status = None;
            self.reload_options();
        }
        self.report(result);
    }

    fn reload_options(&mut self) {
        let len = self.option_labels().len();
        let focused = self.chosen_index().unwrap_or(0);
        dispatch_mvi!(
            self,
            options,
            OptionListReducer,
            OptionListIntent::Load { len, focused }
        );
        self.mark_dirty();
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        if let Err(err) = result {
            self.status = Some(StatusLine {
                text: err.to_string(),
                is_error: true,
            });
            self.mark_dirty();
        }
    }
}
