use crate::domain::b001_booking::api;
use crate::shared::confirm::confirm_discard;
use crate::shared::toast::ToastService;
use contracts::domain::b001_booking::{
    Booking, BookingDto, BookingStatus, StatusAction, TransitionCtx,
};
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    View,
    Edit,
    Create,
}

/// State machine behind the side panel.
///
/// `pristine` holds the form exactly as it was when editing started; dirtiness
/// is a plain struct comparison, so reverting a field by hand also reverts the
/// dirty flag.
#[derive(Clone, Copy)]
pub struct BookingSidePanelViewModel {
    pub open: RwSignal<bool>,
    pub mode: RwSignal<PanelMode>,
    pub booking: RwSignal<Option<Booking>>,
    pub form: RwSignal<BookingDto>,
    pristine: RwSignal<BookingDto>,
    pub saving: RwSignal<bool>,
    pub field_errors: RwSignal<HashMap<String, String>>,
    /// Fires after any successful write so the calendar can refetch.
    on_changed: Callback<()>,
}

impl BookingSidePanelViewModel {
    pub fn new(on_changed: Callback<()>) -> Self {
        Self {
            open: RwSignal::new(false),
            mode: RwSignal::new(PanelMode::View),
            booking: RwSignal::new(None),
            form: RwSignal::new(BookingDto::default()),
            pristine: RwSignal::new(BookingDto::default()),
            saving: RwSignal::new(false),
            field_errors: RwSignal::new(HashMap::new()),
            on_changed,
        }
    }

    // ------------------------------------------------------------------
    // Opening / closing
    // ------------------------------------------------------------------

    pub fn open_view(&self, booking: Booking) {
        let dto = BookingDto::from(booking.clone());
        self.booking.set(Some(booking));
        self.form.set(dto.clone());
        self.pristine.set(dto);
        self.field_errors.set(HashMap::new());
        self.mode.set(PanelMode::View);
        self.open.set(true);
    }

    pub fn open_create(&self, check_in: Option<chrono::NaiveDate>) {
        let mut dto = BookingDto::new_for_create();
        dto.check_in = check_in;
        self.booking.set(None);
        self.form.set(dto.clone());
        self.pristine.set(dto);
        self.field_errors.set(HashMap::new());
        self.mode.set(PanelMode::Create);
        self.open.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.form.get() != self.pristine.get()
    }

    fn is_dirty_untracked(&self) -> bool {
        self.form.get_untracked() != self.pristine.get_untracked()
    }

    /// Close the panel, asking for confirmation over unsaved edits.
    pub fn close(&self) {
        if self.mode.get_untracked() != PanelMode::View
            && self.is_dirty_untracked()
            && !confirm_discard()
        {
            return;
        }
        self.open.set(false);
    }

    // ------------------------------------------------------------------
    // Mode switching
    // ------------------------------------------------------------------

    pub fn enter_edit(&self) {
        if self.mode.get_untracked() == PanelMode::View && self.booking.get_untracked().is_some() {
            self.field_errors.set(HashMap::new());
            self.mode.set(PanelMode::Edit);
        }
    }

    /// Back out of `Edit` into `View`, restoring the pristine form.
    pub fn cancel_edit(&self) {
        if self.is_dirty_untracked() && !confirm_discard() {
            return;
        }
        match self.mode.get_untracked() {
            PanelMode::Edit => {
                self.form.set(self.pristine.get_untracked());
                self.field_errors.set(HashMap::new());
                self.mode.set(PanelMode::View);
            }
            PanelMode::Create => self.open.set(false),
            PanelMode::View => {}
        }
    }

    // ------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------

    pub fn save(&self, toasts: ToastService) {
        if self.saving.get_untracked() || self.mode.get_untracked() == PanelMode::View {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(message) = form.validate() {
            toasts.error(message);
            return;
        }

        let vm = *self;
        let mode = self.mode.get_untracked();
        self.saving.set(true);
        spawn_local(async move {
            let payload = form.submit_payload();
            let result = match (mode, payload.id.clone()) {
                (PanelMode::Edit, Some(id)) => api::update_booking(&id, &payload).await,
                _ => api::create_booking_record(&payload).await,
            };
            vm.saving.set(false);

            match result {
                Ok(saved) => {
                    toasts.success(match mode {
                        PanelMode::Create => format!("Booking {} created", saved.booking_id),
                        _ => format!("Booking {} saved", saved.booking_id),
                    });
                    vm.open_view(saved);
                    vm.on_changed.run(());
                }
                Err(err) => {
                    if err.has_field_errors() {
                        vm.field_errors.set(err.field_errors.clone());
                    }
                    toasts.error(err.message);
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Status actions
    // ------------------------------------------------------------------

    fn transition_ctx(&self) -> TransitionCtx {
        TransitionCtx {
            outstanding_balance: self
                .booking
                .get_untracked()
                .map(|b| b.outstanding_balance())
                .unwrap_or(0.0),
        }
    }

    /// Actions legal from the current status, for rendering the button row.
    pub fn available_actions(&self) -> Vec<StatusAction> {
        match self.booking.get() {
            Some(booking) => booking.status.available_actions(TransitionCtx {
                outstanding_balance: booking.outstanding_balance(),
            }),
            None => Vec::new(),
        }
    }

    pub fn apply_status_action(&self, action: StatusAction, toasts: ToastService) {
        let Some(booking) = self.booking.get_untracked() else {
            return;
        };
        let next: BookingStatus = match booking.status.apply(action, self.transition_ctx()) {
            Ok(next) => next,
            Err(err) => {
                toasts.error(err.to_string());
                return;
            }
        };

        let vm = *self;
        let id = booking.id.clone();
        let mut dto = BookingDto::from(booking);
        dto.status = next;
        self.saving.set(true);
        spawn_local(async move {
            let result = api::update_booking(&id, &dto).await;
            vm.saving.set(false);

            match result {
                Ok(saved) => {
                    toasts.success(format!(
                        "Booking {} is now {}",
                        saved.booking_id, saved.status
                    ));
                    vm.open_view(saved);
                    vm.on_changed.run(());
                }
                Err(err) => toasts.error(err.message),
            }
        });
    }
}
