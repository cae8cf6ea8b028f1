//! Map database loading.
//!
//! A map database is a whitespace-delimited text file: the place count, the
//! place names, then one adjacency stanza per place (owner name, road count,
//! and per road a destination name followed by the payload tokens). The
//! payload format belongs entirely to the caller: an injected reader
//! consumes exactly one road's payload tokens and returns the payload value.
//! The database is trusted static configuration, but unlike the usual
//! "terminate on corruption" treatment every failure here is a typed error
//! so the driver decides whether to abort.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, MAX_NAME_LEN, MAX_VERTICES};

/// Whitespace-delimited token stream over any buffered reader. Handed to
/// the injected payload reader, which must leave it positioned at the next
/// token after consuming one road's payload.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next whitespace-delimited token; truncated input is a typed error.
    pub fn next_token(&mut self) -> Result<String> {
        let mut token = Vec::new();
        loop {
            let (used, done) = {
                let buf = self.input.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                let mut used = 0;
                let mut done = false;
                for &byte in buf {
                    if byte.is_ascii_whitespace() {
                        used += 1;
                        if !token.is_empty() {
                            done = true;
                            break;
                        }
                    } else {
                        token.push(byte);
                        used += 1;
                    }
                }
                (used, done)
            };
            self.input.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            return Err(Error::MalformedDatabase {
                message: "unexpected end of input".to_string(),
            });
        }
        String::from_utf8(token).map_err(|_| Error::MalformedDatabase {
            message: "token is not valid UTF-8".to_string(),
        })
    }

    /// Next token parsed as an unsigned number.
    pub fn next_u64(&mut self) -> Result<u64> {
        let token = self.next_token()?;
        token.parse().map_err(|_| Error::MalformedDatabase {
            message: format!("expected a number, found {token:?}"),
        })
    }
}

/// Load a map database from `input`, delegating per-road payload parsing to
/// `read_payload`.
pub fn load_map<P, R, F>(input: R, mut read_payload: F) -> Result<Graph<P>>
where
    R: BufRead,
    F: FnMut(&mut TokenReader<R>) -> Result<P>,
{
    let mut tokens = TokenReader::new(input);

    let declared = tokens.next_token()?;
    let declared: i64 = declared.parse().map_err(|_| Error::MalformedDatabase {
        message: format!("expected a place count, found {declared:?}"),
    })?;
    if declared < 1 {
        return Err(Error::TooFewPlaces { count: declared });
    }
    let count = declared as usize;
    if count > MAX_VERTICES {
        return Err(Error::TooManyPlaces {
            count,
            max: MAX_VERTICES,
        });
    }

    let mut graph = Graph::default();
    for _ in 0..count {
        let name = tokens.next_token()?;
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(Error::InvalidPlaceName { name });
        }
        if graph.index_of(&name).is_some() {
            return Err(Error::DuplicatePlace { name });
        }
        graph.push_vertex(name);
    }

    // One adjacency stanza per place, in any order; zero-degree places
    // still appear with a road count of 0.
    for _ in 0..count {
        let owner = tokens.next_token()?;
        let from = graph
            .index_of(&owner)
            .ok_or(Error::UnknownPlace { name: owner })?;
        let degree = tokens.next_u64()?;
        for _ in 0..degree {
            let destination = tokens.next_token()?;
            let to = graph.index_of(&destination).ok_or(Error::UnknownPlace {
                name: destination,
            })?;
            let payload = read_payload(&mut tokens)?;
            graph.add_edge(from, to, payload);
        }
    }

    let roads: usize = graph.vertices().map(|v| v.edges().len()).sum();
    debug!("loaded map database: {} places, {} roads", count, roads);
    Ok(graph)
}

/// Open `path` and load the map database it contains. A missing file is
/// classified as [`Error::MapFileNotFound`].
pub fn load_map_file<P, F>(path: &Path, read_payload: F) -> Result<Graph<P>>
where
    F: FnMut(&mut TokenReader<BufReader<File>>) -> Result<P>,
{
    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::MapFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(err)
        }
    })?;
    load_map(BufReader::new(file), read_payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_distance<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<u64> {
        tokens.next_u64()
    }

    fn load(text: &str) -> Result<Graph<u64>> {
        load_map(text.as_bytes(), read_distance)
    }

    #[test]
    fn token_reader_splits_on_any_whitespace() {
        let mut tokens = TokenReader::new("  alpha\tbeta\n42 ".as_bytes());
        assert_eq!(tokens.next_token().unwrap(), "alpha");
        assert_eq!(tokens.next_token().unwrap(), "beta");
        assert_eq!(tokens.next_u64().unwrap(), 42);
        assert!(matches!(
            tokens.next_token(),
            Err(Error::MalformedDatabase { .. })
        ));
    }

    #[test]
    fn loads_places_and_ordered_roads() {
        let graph = load(
            "3\n\
             A B C\n\
             A 2 B 5 C 2\n\
             B 0\n\
             C 1 B 1\n",
        )
        .unwrap();
        assert_eq!(graph.len(), 3);

        let roads: Vec<(&str, u64)> = graph
            .vertex(0)
            .edges()
            .iter()
            .map(|e| (graph.name(e.target), e.payload))
            .collect();
        assert_eq!(roads, [("B", 5), ("C", 2)]);
        assert!(graph.vertex(1).edges().is_empty());
    }

    #[test]
    fn stanzas_may_appear_in_any_order() {
        let graph = load(
            "2\n\
             A B\n\
             B 1 A 7\n\
             A 0\n",
        )
        .unwrap();
        assert_eq!(graph.vertex(1).edges()[0].target, 0);
        assert_eq!(graph.vertex(1).edges()[0].payload, 7);
    }

    #[test]
    fn zero_places_is_too_few() {
        assert!(matches!(
            load("0\n"),
            Err(Error::TooFewPlaces { count: 0 })
        ));
        assert!(matches!(
            load("-3\n"),
            Err(Error::TooFewPlaces { count: -3 })
        ));
    }

    #[test]
    fn capacity_overflow_is_too_many() {
        let err = load("51\n").unwrap_err();
        assert!(matches!(
            err,
            Error::TooManyPlaces { count: 51, max: MAX_VERTICES }
        ));
    }

    #[test]
    fn unknown_road_endpoint_is_rejected() {
        let err = load(
            "2\n\
             A B\n\
             A 1 Z 9\n\
             B 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownPlace { name } if name == "Z"));
    }

    #[test]
    fn duplicate_header_names_are_rejected() {
        let err = load("2\nA A\nA 0\nA 0\n").unwrap_err();
        assert!(matches!(err, Error::DuplicatePlace { name } if name == "A"));
    }

    #[test]
    fn oversized_place_names_are_rejected() {
        let err = load("1\nAbsurdlyLongPlaceNameHere\n").unwrap_err();
        assert!(matches!(err, Error::InvalidPlaceName { .. }));
    }

    #[test]
    fn truncated_adjacency_section_is_malformed() {
        let err = load("2\nA B\nA 2 B 5\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDatabase { .. }));
    }

    #[test]
    fn garbage_road_count_is_malformed() {
        let err = load("1\nA\nA many\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDatabase { .. }));
    }
}
