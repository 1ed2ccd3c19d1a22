use shared::{ListField, Settings};
use zoon::wasm_bindgen::JsCast;
use zoon::{Rgba, eprintln, *};

mod list_dom;

const APP_BACKGROUND_GRADIENT: &str =
    "linear-gradient(160deg, #1b2a4a 0%, #14203a 55%, #0f1a2e 100%)";

fn shell_surface_color() -> Rgba {
    color!("rgba(16, 24, 42, 0.85)")
}

fn input_surface_color() -> Rgba {
    color!("rgba(255, 255, 255, 0.06)")
}

fn primary_text_color() -> Rgba {
    color!("#eef2ff")
}

fn muted_text_color() -> Rgba {
    color!("rgba(222, 230, 255, 0.65)")
}

fn main() {
    start_app("app", SettingsPage::new);
}

/// The settings form: a work mail field plus the three repeating lists.
#[derive(Clone)]
struct SettingsPage {
    settings: Settings,
    workmail: Mutable<String>,
}

impl SettingsPage {
    fn new() -> impl Element {
        let settings = Settings::default();
        let workmail = Mutable::new(settings.workmail.clone());
        Self { settings, workmail }.root()
    }

    fn root(&self) -> impl Element + use<> {
        Stack::new()
            .s(Width::fill())
            .s(Height::fill())
            .layer(
                El::new()
                    .s(Width::fill())
                    .s(Height::fill())
                    .update_raw_el(|raw_el| raw_el.style("background", APP_BACKGROUND_GRADIENT)),
            )
            // One pair of page-global handlers serves every list row,
            // including rows appended later.
            .update_raw_el(|raw_el| {
                raw_el.global_event_handler_with_options(
                    EventOptions::new().preventable(),
                    |event: events::Click| {
                        let Some(target) = event.dyn_target::<web_sys::Element>() else {
                            return;
                        };
                        if let Ok(Some(control)) =
                            target.closest(&format!(".{}", list_dom::REMOVE_CONTROL_CLASS))
                        {
                            event.prevent_default();
                            list_dom::remove_row_for(&control);
                        }
                    },
                )
            })
            .update_raw_el(|raw_el| {
                raw_el.global_event_handler_with_options(
                    EventOptions::new(),
                    |event: events::KeyUp| {
                        let Some(target) = event.dyn_target::<web_sys::Element>() else {
                            return;
                        };
                        let Ok(Some(element)) =
                            target.closest(&format!(".{}", list_dom::ROW_INPUT_CLASS))
                        else {
                            return;
                        };
                        let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() else {
                            return;
                        };
                        if let Err(error) = list_dom::grow_list_for(&input) {
                            eprintln!("Failed to grow list: {error:#?}");
                        }
                    },
                )
            })
            .layer(self.page())
    }

    fn page(&self) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Scrollbars::both())
            .s(Padding::new().x(24).y(32))
            .s(Font::new().color(primary_text_color()))
            .child(
                Column::new()
                    .s(Width::fill())
                    .s(Align::new().center_x())
                    .s(Gap::new().y(20))
                    .update_raw_el(|raw_el| raw_el.style("max-width", "720px"))
                    .item(self.header_bar())
                    .item(self.settings_panel()),
            )
    }

    fn header_bar(&self) -> impl Element + use<> {
        Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(6))
            .s(
                Font::new()
                    .size(18)
                    .weight(FontWeight::SemiBold)
                    .family([FontFamily::new("JetBrains Mono"), FontFamily::Monospace])
                    .no_wrap(),
            )
            .item(
                El::new()
                    .s(Font::new().color(color!("#6cb6ff")))
                    .child("MailGate"),
            )
            .item(
                El::new()
                    .s(Font::new().color(color!("#d2691e")))
                    .child("/"),
            )
            .item(
                El::new()
                    .s(Font::new().color(color!("#fcbf49")))
                    .child("settings"),
            )
    }

    fn settings_panel(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(22))
            .s(Padding::new().x(20).y(22))
            .s(Background::new().color(shell_surface_color()))
            .s(RoundedCorners::all(24))
            .s(Borders::all(
                Border::new()
                    .color(color!("rgba(255, 255, 255, 0.06)"))
                    .width(1),
            ))
            .update_raw_el(|raw_el| raw_el.style("backdrop-filter", "blur(18px)"))
            .item(self.workmail_field())
            .items(ListField::ALL.map(|field| self.list_section(field)))
    }

    fn workmail_field(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(8))
            .item(field_label("Work mail"))
            .item(
                TextInput::new()
                    .id("workmail")
                    .label_hidden("work mail")
                    .s(Width::fill())
                    .s(Padding::all(10))
                    .s(RoundedCorners::all(10))
                    .s(Background::new().color(input_surface_color()))
                    .s(Font::new().color(primary_text_color()))
                    .placeholder(Placeholder::new("Work mail"))
                    .text(self.settings.workmail.clone())
                    .update_raw_el(|raw_el| {
                        raw_el.attr("name", "workmail").attr("autocomplete", "off")
                    })
                    .on_change({
                        let workmail = self.workmail.clone();
                        move |new_text| workmail.set_neq(new_text)
                    }),
            )
    }

    fn list_section(&self, field: ListField) -> impl Element + use<> {
        let values = self.settings.list(field).to_vec();
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(8))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Align::new().center_y())
                    .item(field_label(field.label()))
                    .item(El::new().s(Align::new().right()).child(add_button(field))),
            )
            .item(
                El::new().s(Width::fill()).update_raw_el(move |raw_el| {
                    raw_el.after_insert(move |element| {
                        if let Err(error) = list_dom::mount_list(&element, field, &values) {
                            eprintln!("Failed to mount {} list: {error:#?}", field.as_str());
                        }
                    })
                }),
            )
    }
}

fn field_label(text: &'static str) -> impl Element {
    El::new()
        .s(
            Font::new()
                .size(14)
                .weight(FontWeight::SemiBold)
                .color(muted_text_color()),
        )
        .child(text)
}

fn add_button(field: ListField) -> impl Element {
    let hovered = Mutable::new(false);
    Button::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all(14))
        .s(Font::new().size(13).color(primary_text_color()))
        .s(Background::new().color_signal(hovered.signal().map_bool(
            || color!("rgba(108, 162, 255, 0.45)"),
            || color!("rgba(108, 162, 255, 0.25)"),
        )))
        .label("+ Add")
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_press(move || {
            if let Err(error) = list_dom::add_row(field) {
                eprintln!("Failed to add {} row: {error:#?}", field.as_str());
            }
        })
}
