//! Surprise-me prompt picker
use rand::seq::SliceRandom;

pub const SURPRISE_PROMPTS: &[&str] = &[
    "a plush toy robot sitting against a yellow wall",
    "an oil painting of a lighthouse in a thunderstorm",
    "a fox reading a newspaper in a paris cafe",
    "a watercolor sketch of a floating market at dawn",
    "a cathedral built entirely from stained glass",
    "an astronaut planting tulips on the moon",
    "a steampunk submarine surfacing in a teacup",
    "a city skyline made of circuit boards at night",
    "a polar bear conducting an orchestra of penguins",
    "a bonsai tree growing on the back of a turtle",
    "a library where the books are flying like birds",
    "a desert caravan of giant mechanical elephants",
    "a cottage on a cliff held up by balloons",
    "a jellyfish drifting through a neon-lit subway",
    "a chessboard landscape with mountains for kings",
    "a samurai duel on a bridge of frozen lightning",
    "a greenhouse inside an abandoned cathedral",
    "a whale swimming through clouds above a wheat field",
    "a clockwork hummingbird sipping from a glass flower",
    "a midnight train crossing an aurora-lit tundra",
];

/// Pick a random prompt, avoiding an immediate repeat of the current one
pub fn random_prompt(current: &str) -> &'static str {
    let pick = SURPRISE_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("prompt list is non-empty");

    if pick == current {
        return random_prompt(current);
    }

    pick
}
