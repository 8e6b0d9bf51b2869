pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}
