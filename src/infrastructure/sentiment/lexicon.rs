// Built-in word lists for the headline scorer.
// Valences use the -4..4 scale of the VADER lexicon.

pub const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("rally", 1.9),
    ("rallies", 1.9),
    ("rallied", 1.9),
    ("rallying", 1.8),
    ("surge", 1.8),
    ("surges", 1.8),
    ("surged", 1.8),
    ("soar", 2.0),
    ("soars", 2.0),
    ("soared", 2.0),
    ("gain", 2.4),
    ("gains", 1.8),
    ("gained", 1.6),
    ("bullish", 2.1),
    ("boom", 2.0),
    ("booming", 2.1),
    ("profit", 1.9),
    ("profits", 1.9),
    ("profitable", 1.9),
    ("growth", 1.6),
    ("grow", 1.3),
    ("win", 2.8),
    ("wins", 2.7),
    ("winning", 2.4),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("strong", 2.3),
    ("stronger", 1.6),
    ("recover", 1.3),
    ("recovers", 1.3),
    ("recovery", 1.4),
    ("rebound", 1.5),
    ("rebounds", 1.5),
    ("good", 1.9),
    ("great", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("positive", 2.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("supports", 1.5),
    ("approve", 1.8),
    ("approved", 1.8),
    ("approval", 2.3),
    ("upgrade", 1.5),
    ("benefit", 2.0),
    ("opportunity", 1.8),
    ("opportunities", 1.6),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("trust", 2.3),
    ("secure", 1.4),
    ("safe", 1.9),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("happy", 2.7),
    ("love", 3.2),
    ("record", 0.9),
    // Negative
    ("crash", -1.7),
    ("crashes", -1.7),
    ("crashed", -1.7),
    ("crashing", -1.8),
    ("panic", -2.3),
    ("panicked", -2.0),
    ("plunge", -2.0),
    ("plunges", -2.0),
    ("plunged", -2.0),
    ("slump", -1.8),
    ("slumps", -1.8),
    ("collapse", -2.2),
    ("collapses", -2.2),
    ("collapsed", -2.2),
    ("drop", -1.1),
    ("drops", -1.1),
    ("dropped", -1.1),
    ("fall", -1.2),
    ("falls", -1.2),
    ("fell", -1.2),
    ("decline", -1.3),
    ("declines", -1.3),
    ("bearish", -1.9),
    ("dump", -1.6),
    ("fear", -2.2),
    ("fears", -1.8),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lose", -1.9),
    ("lost", -1.3),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("risk", -1.1),
    ("risky", -1.4),
    ("worry", -1.9),
    ("worries", -1.7),
    ("concern", -1.2),
    ("concerns", -1.2),
    ("uncertainty", -1.4),
    ("volatile", -0.9),
    ("warning", -1.4),
    ("hack", -1.5),
    ("hacked", -1.7),
    ("scam", -2.7),
    ("fraud", -2.8),
    ("crisis", -3.1),
    ("ban", -2.6),
    ("banned", -2.0),
    ("lawsuit", -1.5),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.6),
    ("fail", -2.5),
    ("fails", -2.3),
    ("failure", -2.3),
    ("weak", -1.9),
    ("weaker", -1.5),
    ("terrible", -2.1),
    ("sad", -2.1),
    ("hate", -2.7),
];

pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "nobody", "nowhere",
    "cannot", "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't", "werent", "weren't", "wont",
    "won't", "wouldnt", "wouldn't", "shouldnt", "shouldn't", "couldnt", "couldn't",
    "without", "hardly", "barely", "rarely", "seldom",
];

/// Degree modifiers: positive entries amplify, negative entries dampen
pub const BOOSTERS: &[(&str, f64)] = &[
    ("very", 1.0),
    ("extremely", 1.0),
    ("hugely", 1.0),
    ("highly", 1.0),
    ("massively", 1.0),
    ("significantly", 1.0),
    ("sharply", 1.0),
    ("dramatically", 1.0),
    ("incredibly", 1.0),
    ("really", 1.0),
    ("so", 1.0),
    ("slightly", -1.0),
    ("somewhat", -1.0),
    ("marginally", -1.0),
    ("kinda", -1.0),
];
