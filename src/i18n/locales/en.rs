use crate::i18n::Translations;

/// English strings. This is the fallback dictionary.
pub const EN: Translations = Translations {
    refresh: "Refresh buoys data",
    wave_height: "Wave Height",
    period: "Period",
    meters: "Meters",
    feet: "Feet",
    title: "The Buoy",

    height: "Height",
    hmax: "Hmax",
    direction: "Direction",

    see_more: "See more at",
    view_all_readings: "View all readings for buoy",
    powered_by: "Powered by",

    time_unknown: "time unknown",
    just_now: "just now",
    min_ago: "min ago",
    hours: "h",
    minutes: "m",
    ago: "ago",
    seconds: "s",
};
