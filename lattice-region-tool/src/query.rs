use std::io;

use anyhow::Context as _;
use manyfmt::Refmt as _;

use lattice_region::math::{IntVector3, Region3i};
use lattice_region::util::ConciseDebug;

/// A question about one or two regions, as requested on the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Query {
    /// Describe the region's corners, size and volume.
    Info(Region3i),
    /// List the points of the region in iteration order.
    Points {
        /// Region to iterate.
        region: Region3i,
        /// Stop after this many points.
        limit: Option<usize>,
    },
    /// Report whether the region encompasses the point.
    Contains {
        /// Region to test against.
        region: Region3i,
        /// Point to test.
        point: IntVector3,
    },
    /// Report the point of the region nearest to the given point.
    Nearest {
        /// Region to clamp into.
        region: Region3i,
        /// Point to clamp.
        point: IntVector3,
    },
    /// Describe the intersection of two regions.
    Intersect(Region3i, Region3i),
}

/// Evaluates `query` and writes the answer to `out`, one fact per line.
pub fn execute(query: &Query, out: &mut dyn io::Write) -> Result<(), anyhow::Error> {
    let result = match *query {
        Query::Info(region) => write_info(region, out),
        Query::Points { region, limit } => write_points(region, limit, out),
        Query::Contains { region, point } => {
            let contained = region.encompasses(point);
            log::debug!(
                "{point:?} {verb} in {region}",
                verb = if contained { "is" } else { "is not" },
                region = region.refmt(&ConciseDebug)
            );
            writeln!(out, "{contained}").map_err(anyhow::Error::from)
        }
        Query::Nearest { region, point } => {
            if region.is_empty() {
                log::warn!("region is empty; reporting its minimum corner instead");
            }
            writeln!(out, "{:?}", region.nearest_point_to(point)).map_err(anyhow::Error::from)
        }
        Query::Intersect(a, b) => {
            let intersection = a.intersect(b);
            if intersection.is_empty() {
                log::info!("regions do not overlap");
            }
            write_info(intersection, out)
        }
    };
    result.context("failed to write query result")
}

fn write_info(region: Region3i, out: &mut dyn io::Write) -> Result<(), anyhow::Error> {
    writeln!(out, "region: {}", region.refmt(&ConciseDebug))?;
    writeln!(out, "min: {:?}", region.min())?;
    writeln!(out, "max: {:?}", region.max())?;
    writeln!(out, "size: {:?}", region.size())?;
    match region.volume() {
        Some(volume) => writeln!(out, "volume: {volume}")?,
        None => writeln!(out, "volume: too large to count")?,
    }
    writeln!(out, "empty: {}", region.is_empty())?;
    Ok(())
}

fn write_points(
    region: Region3i,
    limit: Option<usize>,
    out: &mut dyn io::Write,
) -> Result<(), anyhow::Error> {
    let mut iter = region.iter();
    let mut written: usize = 0;
    for point in iter.by_ref().take(limit.unwrap_or(usize::MAX)) {
        writeln!(out, "{point:?}")?;
        written += 1;
    }
    log::debug!("wrote {written} points");

    match iter.size_hint() {
        (0, Some(0)) => {}
        (_, Some(remaining)) => writeln!(out, "... {remaining} more")?,
        (_, None) => writeln!(out, "... more")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn run(query: Query) -> String {
        let mut out = Vec::new();
        execute(&query, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn info() {
        assert_eq!(
            run(Query::Info(Region3i::from_min_and_size([1, 2, 3], [4, 4, 4]))),
            indoc! {"
                region: (+1, +2, +3)..=(+4, +5, +6)
                min: (+1, +2, +3)
                max: (+4, +5, +6)
                size: (+4, +4, +4)
                volume: 64
                empty: false
            "}
        );
    }

    #[test]
    fn info_empty() {
        assert_eq!(
            run(Query::Info(Region3i::from_min_and_size([1, 1, 1], [0, 1, 1]))),
            indoc! {"
                region: empty
                min: (+1, +1, +1)
                max: (+0, +1, +1)
                size: (+0, +1, +1)
                volume: 0
                empty: true
            "}
        );
    }

    #[test]
    fn info_huge() {
        let text = run(Query::Info(Region3i::from_min_and_size(
            [0, 0, 0],
            [i32::MAX, i32::MAX, i32::MAX],
        )));
        assert!(text.contains("volume: too large to count\n"), "{text}");
    }

    #[test]
    fn points_all() {
        assert_eq!(
            run(Query::Points {
                region: Region3i::from_min_max([0, 0, 0], [1, 0, 1]),
                limit: None,
            }),
            indoc! {"
                (+0, +0, +0)
                (+0, +0, +1)
                (+1, +0, +0)
                (+1, +0, +1)
            "}
        );
    }

    #[test]
    fn points_limited() {
        assert_eq!(
            run(Query::Points {
                region: Region3i::from_min_max([0, 0, 0], [9, 9, 9]),
                limit: Some(2),
            }),
            indoc! {"
                (+0, +0, +0)
                (+0, +0, +1)
                ... 998 more
            "}
        );
    }

    #[test]
    fn points_empty() {
        assert_eq!(
            run(Query::Points {
                region: Region3i::EMPTY,
                limit: Some(5),
            }),
            ""
        );
    }

    #[test]
    fn contains() {
        let region = Region3i::from_min_max([0, 0, 0], [4, 4, 4]);
        assert_eq!(
            run(Query::Contains {
                region,
                point: IntVector3::new(4, 0, 2),
            }),
            "true\n"
        );
        assert_eq!(
            run(Query::Contains {
                region,
                point: IntVector3::new(5, 0, 2),
            }),
            "false\n"
        );
    }

    #[test]
    fn nearest() {
        assert_eq!(
            run(Query::Nearest {
                region: Region3i::from_min_max([0, 0, 0], [4, 4, 4]),
                point: IntVector3::new(15, 2, 1),
            }),
            "(+4, +2, +1)\n"
        );
    }

    #[test]
    fn intersect() {
        assert_eq!(
            run(Query::Intersect(
                Region3i::from_min_max([0, 0, 0], [32, 32, 32]),
                Region3i::from_min_max([103, 103, 103], [170, 170, 170]),
            )),
            indoc! {"
                region: empty
                min: (+0, +0, +0)
                max: (-1, -1, -1)
                size: (+0, +0, +0)
                volume: 0
                empty: true
            "}
        );
    }

    #[test]
    fn write_failure_has_context() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("pipe closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let error = execute(&Query::Info(Region3i::EMPTY), &mut Broken).unwrap_err();
        assert_eq!(
            format!("{error:#}"),
            "failed to write query result: pipe closed"
        );
    }
}
