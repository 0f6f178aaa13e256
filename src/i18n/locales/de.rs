use crate::i18n::Translations;

/// German strings.
pub const DE: Translations = Translations {
    refresh: "Bojendaten aktualisieren",
    wave_height: "Wellenhöhe",
    period: "Periode",
    meters: "Meter",
    feet: "Fuß",
    title: "Die Boje",

    height: "Höhe",
    hmax: "Hmax",
    direction: "Richtung",

    see_more: "Mehr sehen auf",
    view_all_readings: "Alle Messwerte der Boje anzeigen",
    powered_by: "Bereitgestellt von",

    time_unknown: "Zeit unbekannt",
    just_now: "gerade eben",
    min_ago: "Min.",
    hours: "Std.",
    minutes: "Min.",
    ago: "vor",
    seconds: "s",
};
