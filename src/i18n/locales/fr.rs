use crate::i18n::Translations;

/// French strings.
pub const FR: Translations = Translations {
    refresh: "Actualiser les données des bouées",
    wave_height: "Hauteur de vague",
    period: "Période",
    meters: "Mètres",
    feet: "Pieds",
    title: "La Bouée",

    height: "Hauteur",
    hmax: "Hmax",
    direction: "Direction",

    see_more: "Voir plus sur",
    view_all_readings: "Voir tous les relevés de la bouée",
    powered_by: "Propulsé par",

    time_unknown: "heure inconnue",
    just_now: "à l'instant",
    min_ago: "min",
    hours: "h",
    minutes: "min",
    ago: "il y a",
    seconds: "s",
};
