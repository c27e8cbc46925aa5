use crate::domain::b001_booking::api;
use crate::shared::toast::ToastService;
use chrono::NaiveDate;
use contracts::projections::p901_calendar_month::{
    collect_month_bookings, layout_capsules, BookingCapsule, CalendarDay,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Month-view state. Fetched days are authoritative; capsules are laid out
/// locally from them on every change.
#[derive(Clone, Copy)]
pub struct CalendarViewModel {
    pub year: RwSignal<i32>,
    pub month: RwSignal<u32>,
    pub days: RwSignal<Vec<CalendarDay>>,
    pub loading: RwSignal<bool>,
    /// A failed fetch leaves an empty grid plus a retry notice rather than
    /// stale data from another month.
    pub load_failed: RwSignal<bool>,
    pub hovered_date: RwSignal<Option<NaiveDate>>,
    /// Fence for out-of-order month responses.
    generation: RwSignal<u64>,
}

fn today() -> (i32, u32, u32) {
    let now = js_sys::Date::new_0();
    (
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

impl CalendarViewModel {
    pub fn new() -> Self {
        let (year, month, _) = today();
        Self {
            year: RwSignal::new(year),
            month: RwSignal::new(month),
            days: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            load_failed: RwSignal::new(false),
            hovered_date: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn capsules(&self) -> Vec<BookingCapsule> {
        let days = self.days.get();
        let bookings = collect_month_bookings(&days);
        layout_capsules(&bookings, self.year.get(), self.month.get())
    }

    pub fn load(&self, toasts: ToastService) {
        let year = self.year.get_untracked();
        let month = self.month.get_untracked();
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.loading.set(true);

        let vm = *self;
        spawn_local(async move {
            let result = api::fetch_calendar(year, month).await;
            // A newer navigation superseded this fetch.
            if vm.generation.get_untracked() != generation {
                return;
            }
            vm.loading.set(false);
            match result {
                Ok(days) => {
                    vm.load_failed.set(false);
                    vm.days.set(days);
                }
                Err(message) => {
                    log::warn!("calendar fetch failed: {}", message);
                    vm.load_failed.set(true);
                    vm.days.set(Vec::new());
                    toasts.error("Could not load the calendar for this month");
                }
            }
        });
    }

    pub fn go_prev(&self, toasts: ToastService) {
        let (y, m) = crate::shared::date_utils::prev_month(
            self.year.get_untracked(),
            self.month.get_untracked(),
        );
        self.year.set(y);
        self.month.set(m);
        self.load(toasts);
    }

    pub fn go_next(&self, toasts: ToastService) {
        let (y, m) = crate::shared::date_utils::next_month(
            self.year.get_untracked(),
            self.month.get_untracked(),
        );
        self.year.set(y);
        self.month.set(m);
        self.load(toasts);
    }

    pub fn go_today(&self, toasts: ToastService) {
        let (year, month, _) = today();
        self.year.set(year);
        self.month.set(month);
        self.load(toasts);
    }

    pub fn is_today(&self, day: u32) -> bool {
        let (year, month, date) = today();
        self.year.get() == year && self.month.get() == month && day == date
    }

    pub fn day_at(&self, day: u32) -> Option<CalendarDay> {
        NaiveDate::from_ymd_opt(self.year.get(), self.month.get(), day)
            .and_then(|date| self.days.get().into_iter().find(|d| d.date == date))
    }
}
