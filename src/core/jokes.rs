//! Jokes module - Something to read while the blender runs

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

pub const JOKES: &[&str] = &[
    "A SQL query walks into a bar, walks up to two tables and asks: 'Can I join you?'",
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "A programmer's spouse says: 'Buy a loaf of bread, and if they have eggs, buy a dozen.' They come home with 12 loaves.",
    "Why did the developer go broke? Because they used up all their cache.",
    "Knock knock. Race condition. Who's there?",
    "The borrow checker walks into a bar. The bartender is still waiting for it to give the glass back.",
    "Why was the JavaScript developer sad? Because they didn't Node how to Express themselves.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "I told my blender a joke about recursion. It told me a joke about recursion.",
    "Debugging: being the detective in a crime movie where you are also the murderer.",
    "An optimist says the glass is half full. A programmer says the glass is twice as large as it needs to be.",
];

/// Pick a joke at random
pub fn random() -> &'static str {
    let seed = RandomState::new().build_hasher().finish();
    JOKES[(seed % JOKES.len() as u64) as usize]
}
