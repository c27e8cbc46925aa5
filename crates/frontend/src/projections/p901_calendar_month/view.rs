use super::view_model::CalendarViewModel;
use crate::domain::b001_booking::api;
use crate::domain::b001_booking::ui::side_panel::{BookingSidePanel, BookingSidePanelViewModel};
use crate::domain::b003_blocked_date::ui::BlockDatesDialog;
use crate::shared::date_utils::{days_in_month, first_weekday_offset, month_title};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::projections::p901_calendar_month::{capsule_geometry, BookingCapsule, DayStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = CalendarViewModel::new();
    let block_dialog_open = RwSignal::new(false);

    let panel = BookingSidePanelViewModel::new(Callback::new(move |_| vm.load(toasts)));
    vm.load(toasts);

    let open_booking = Callback::new(move |booking_id: String| {
        spawn_local(async move {
            match api::fetch_booking(&booking_id).await {
                Ok(booking) => panel.open_view(booking),
                Err(message) => {
                    log::warn!("failed to load booking {}: {}", booking_id, message);
                    toasts.error("Could not load that booking");
                }
            }
        });
    });

    view! {
        <div class="page calendar">
            <div class="calendar__toolbar">
                <h1 class="calendar__title">
                    {move || month_title(vm.year.get(), vm.month.get())}
                </h1>
                <div class="calendar__nav">
                    <button class="button button--icon" on:click=move |_| vm.go_prev(toasts)>
                        {icon("chevron-left")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.go_today(toasts)>
                        {"Today"}
                    </button>
                    <button class="button button--icon" on:click=move |_| vm.go_next(toasts)>
                        {icon("chevron-right")}
                    </button>
                </div>
                <div class="calendar__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| block_dialog_open.set(true)
                    >
                        {icon("block")}
                        {"Block dates"}
                    </button>
                    <button
                        class="button button--primary"
                        on:click=move |_| panel.open_create(None)
                    >
                        {icon("plus")}
                        {"New booking"}
                    </button>
                </div>
            </div>

            {move || vm.load_failed.get().then(|| view! {
                <div class="calendar__error">
                    <span>{"This month could not be loaded."}</span>
                    <button class="button button--link" on:click=move |_| vm.load(toasts)>
                        {icon("refresh")}
                        {"Retry"}
                    </button>
                </div>
            })}

            <MonthGrid vm=vm panel=panel open_booking=open_booking />

            <BookingSidePanel vm=panel />
            <BlockDatesDialog
                open=block_dialog_open
                on_created=Callback::new(move |_| vm.load(toasts))
            />
        </div>
    }
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[component]
fn MonthGrid(
    vm: CalendarViewModel,
    panel: BookingSidePanelViewModel,
    open_booking: Callback<String>,
) -> impl IntoView {
    // Week rows of the displayed month; `None` cells pad the first and last
    // week so each row always holds seven entries.
    let weeks = move || {
        let offset = first_weekday_offset(vm.year.get(), vm.month.get());
        let total = days_in_month(vm.year.get(), vm.month.get());
        let mut cells: Vec<Option<u32>> = vec![None; offset as usize];
        cells.extend((1..=total).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| week.to_vec())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="month-grid">
            <div class="month-grid__weekdays">
                {WEEKDAYS
                    .into_iter()
                    .map(|day| view! { <span class="month-grid__weekday">{day}</span> })
                    .collect_view()}
            </div>
            {move || {
                let capsules = vm.capsules();
                weeks()
                    .into_iter()
                    .enumerate()
                    .map(|(row_idx, week)| {
                        let row_capsules: Vec<BookingCapsule> = capsules
                            .iter()
                            .filter(|c| c.row == row_idx as u32)
                            .cloned()
                            .collect();
                        view! {
                            <WeekRow
                                vm=vm
                                panel=panel
                                week=week
                                capsules=row_capsules
                                open_booking=open_booking
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn WeekRow(
    vm: CalendarViewModel,
    panel: BookingSidePanelViewModel,
    week: Vec<Option<u32>>,
    capsules: Vec<BookingCapsule>,
    open_booking: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="month-grid__row">
            {week
                .into_iter()
                .map(|day| match day {
                    Some(day) => view! { <DayCell vm=vm panel=panel day=day /> }.into_any(),
                    None => view! { <div class="day-cell day-cell--pad"></div> }.into_any(),
                })
                .collect_view()}
            {capsules
                .into_iter()
                .map(|capsule| {
                    let (left, width) = capsule_geometry(capsule.col, capsule.span);
                    let id = capsule.booking.id.clone();
                    let tooltip = format!(
                        "{} · {} · {} night{}",
                        capsule.booking.booking_id,
                        capsule.booking.guest_name,
                        capsule.nights,
                        if capsule.nights == 1 { "" } else { "s" },
                    );
                    view! {
                        <button
                            class="booking-capsule"
                            style=format!(
                                "left: {:.3}%; width: {:.3}%; background-color: {};",
                                left, width, capsule.color
                            )
                            title=tooltip
                            on:click=move |_| open_booking.run(id.clone())
                        >
                            <span class="booking-capsule__label">
                                {capsule.booking.guest_name.clone()}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DayCell(vm: CalendarViewModel, panel: BookingSidePanelViewModel, day: u32) -> impl IntoView {
    let info = move || vm.day_at(day);
    let status_class = move || match info().map(|d| d.status).unwrap_or_default() {
        DayStatus::Available => "day-cell--available",
        DayStatus::Booked => "day-cell--booked",
        DayStatus::Blocked => "day-cell--blocked",
        DayStatus::CheckIn => "day-cell--check-in",
        DayStatus::CheckOut => "day-cell--check-out",
    };

    let on_click = move |_| {
        let Some(day_info) = info() else {
            return;
        };
        // Free days start a new booking at that date; occupied days are
        // reached through their capsule instead.
        if day_info.status == DayStatus::Available && day_info.booking.is_none() {
            panel.open_create(Some(day_info.date));
        }
    };

    view! {
        <div
            class=move || format!("day-cell {}", status_class())
            class:day-cell--today=move || vm.is_today(day)
            on:click=on_click
            on:mouseenter=move |_| {
                vm.hovered_date.set(info().map(|d| d.date));
            }
            on:mouseleave=move |_| vm.hovered_date.set(None)
        >
            <span class="day-cell__number">{day}</span>
            {move || {
                info()
                    .and_then(|d| d.blocked)
                    .map(|blocked| view! {
                        <span class="day-cell__blocked" title=blocked.notes.clone()>
                            {blocked.reason.label()}
                        </span>
                    })
            }}
        </div>
    }
}
