//! Random fixtures for exercising the API in tests and demos.

use rand::seq::SliceRandom;
use rand::Rng;

const NAMES: &[&str] = &[
    "Amara", "Bela", "Caspian", "Dashiell", "Elowen", "Farid", "Greta", "Hugo", "Ines",
    "Jasper", "Kaia", "Leander", "Mireille", "Nadia", "Otis", "Priya", "Quentin", "Rosalind",
    "Soren", "Talia", "Umberto", "Vera", "Wilhelmina", "Xanthe", "Yusuf", "Zora",
];

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "coral", "dusky", "emerald", "feral", "gilded", "hollow", "ivory",
    "jagged", "keen", "lucid", "mellow", "nimble", "opaline", "pallid", "quiet", "rustic",
    "sable", "tidal", "umber", "vivid", "wistful",
];

const NOUNS: &[&str] = &[
    "anchor", "beacon", "current", "delta", "ember", "fjord", "grove", "harbor", "islet",
    "jetty", "knoll", "lagoon", "meadow", "nebula", "orchard", "prairie", "quarry", "ridge",
    "summit", "thicket", "valley", "wharf",
];

/// A single given name, guaranteed at most 30 characters.
pub fn random_name() -> String {
    let mut rng = rand::thread_rng();
    // List entries are all short, so one draw always fits.
    NAMES.choose(&mut rng).unwrap_or(&"Amara").to_string()
}

/// A few sentences of plausible prose for descriptions and memos.
pub fn random_text() -> String {
    let mut rng = rand::thread_rng();
    let sentences = rng.gen_range(1..=4);
    let mut out = Vec::with_capacity(sentences);
    for _ in 0..sentences {
        let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&"amber");
        let noun = NOUNS.choose(&mut rng).unwrap_or(&"harbor");
        let name = NAMES.choose(&mut rng).unwrap_or(&"Amara");
        out.push(format!("{name} charted the {adjective} {noun}"));
    }
    out.join(". ")
}

/// A seeded placeholder image URL at NFT card dimensions.
pub fn random_image_url() -> String {
    let seed: u32 = rand::thread_rng().gen_range(0..10_000_000);
    format!("https://picsum.photos/seed/{seed}/540/670")
}

/// A seeded placeholder banner URL.
pub fn random_banner_url() -> String {
    let seed: u32 = rand::thread_rng().gen_range(0..10_000_000);
    format!("https://picsum.photos/seed/{seed}/1920/300")
}
