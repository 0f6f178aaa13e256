use crate::i18n::Translations;

/// Italian strings.
///
/// Title and attribution stay in English, as shipped by the widget.
pub const IT: Translations = Translations {
    refresh: "Aggiorna dati delle boe",
    wave_height: "Altezza",
    period: "Periodo",
    meters: "Metri",
    feet: "Piedi",
    title: "The Buoy",

    height: "Altezza",
    hmax: "Hmax",
    direction: "Direzione",

    see_more: "Vedi altro su",
    view_all_readings: "Visualizza tutte le letture della boa",
    powered_by: "Powered by",

    time_unknown: "ora sconosciuta",
    just_now: "proprio ora",
    min_ago: "min fa",
    hours: "h",
    minutes: "min",
    ago: "fa",
    seconds: "s",
};
