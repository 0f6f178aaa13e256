use crate::i18n::Translations;

/// Spanish strings.
pub const ES: Translations = Translations {
    refresh: "Actualizar datos de boyas",
    wave_height: "Altura",
    period: "Período",
    meters: "Metros",
    feet: "Pies",
    title: "La Boya",

    height: "Altura",
    hmax: "Hmax",
    direction: "Dirección",

    see_more: "Ver más en",
    view_all_readings: "Ver todas las lecturas de la boya",
    powered_by: "Desarrollado por",

    time_unknown: "hora desconocida",
    just_now: "ahora mismo",
    min_ago: "min",
    hours: "h",
    minutes: "min",
    ago: "hace",
    seconds: "s",
};
