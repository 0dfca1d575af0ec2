use crate::image::{Rgb, RgbBuffer};

const EYE_ROW: usize = 3;
const EYE_WHITE: Rgb = [200, 200, 200];
const PUPIL: Rgb = [0x10, 0x08, 0x02];

/// Paint two eyes on row 3 of an 8×8 face patch, pupils facing inwards.
pub fn paint_eyes(face: &mut RgbBuffer) {
    if face.width() < 8 || face.height() <= EYE_ROW {
        return;
    }
    for (x, px) in [(1, EYE_WHITE), (2, PUPIL), (5, PUPIL), (6, EYE_WHITE)] {
        face.set(x, EYE_ROW, px);
    }
}
