use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::parser;
use crate::puzzle::{EightPuzzle, LightsOutPuzzle};
use crate::LoadPuzzles;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadPuzzles for str {
    fn load_lights_out(&self) -> Result<Vec<LightsOutPuzzle>, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse_lights_out(&text)?)
    }

    fn load_eight_puzzles(&self) -> Result<Vec<EightPuzzle>, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse_eight_puzzles(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading() {
        let lights = "data/lights_out/small.txt".load_lights_out().unwrap();
        assert!(!lights.is_empty());
        let eights = "data/eight_puzzle/short.txt".load_eight_puzzles().unwrap();
        assert!(!eights.is_empty());

        assert!("data/no-such-file.txt".load_lights_out().is_err());
        // wrong format
        assert!("data/lights_out/small.txt".load_eight_puzzles().is_err());
    }
}
