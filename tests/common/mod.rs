#![allow(dead_code)]

use phraseforge::config::{ScoringParams, UnmappedPolicy};
use phraseforge::geometry::{KeyLayout, KeyPositions, Point};
use phraseforge::layouts::Fingering;
use phraseforge::scorer::loader::read_key_positions;
use phraseforge::scorer::Scorer;
use std::io::Cursor;
use std::sync::Arc;

/// Row-staggered QWERTY, in the same format as data/key_positions.csv.
pub const QWERTY_CSV: &str = "key,x,y
q,0,0
w,1,0
e,2,0
r,3,0
t,4,0
y,5,0
u,6,0
i,7,0
o,8,0
p,9,0
a,0.25,1
s,1.25,1
d,2.25,1
f,3.25,1
g,4.25,1
h,5.25,1
j,6.25,1
k,7.25,1
l,8.25,1
;,9.25,1
z,0.75,2
x,1.75,2
c,2.75,2
v,3.75,2
b,4.75,2
n,5.75,2
m,6.75,2
.,8.75,2
/,9.75,2
space,4.5,3
";

pub fn qwerty_positions() -> KeyPositions {
    read_key_positions(Cursor::new(QWERTY_CSV)).expect("fixture CSV must parse")
}

pub fn layout(fingering: Fingering) -> Arc<KeyLayout> {
    Arc::new(KeyLayout::new(fingering, qwerty_positions()).expect("fixture layout"))
}

pub fn scorer_with(fingering: Fingering, unmapped: UnmappedPolicy) -> Scorer {
    Scorer::new(
        layout(fingering),
        &ScoringParams {
            unmapped,
            fingering,
            ..Default::default()
        },
    )
    .expect("default penalty is valid")
}

pub fn classic_scorer() -> Scorer {
    scorer_with(Fingering::Classic, UnmappedPolicy::Reject)
}

pub fn pos(layout: &KeyLayout, key: char) -> Point {
    layout.position_of(key).expect("fixture key")
}

pub fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
