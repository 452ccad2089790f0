//! Command line option parsing.

use std::str::FromStr;

use anyhow::Context as _;
use clap::Parser;

use lattice_region::math::{IntVector3, LatticeCoordinate, Region3i};
use lattice_region_tool::Query;
use lattice_region_tool::logging::LoggingArgs;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "lattice-region", author, about, version,
    help_template = "\
{name} {version}
{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}",
)]
pub(crate) struct ToolArgs {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub(crate) enum Command {
    /// Print the corners, size and volume of a region.
    Info {
        #[command(flatten)]
        region: RegionArgs,
    },

    /// Print the region spanned by two opposite corners, given in either order.
    Bounded {
        /// One corner.
        #[arg(value_name = "X,Y,Z", allow_hyphen_values = true)]
        a: VectorArg,
        /// The opposite corner.
        #[arg(value_name = "X,Y,Z", allow_hyphen_values = true)]
        b: VectorArg,
    },

    /// List every point of a region, X-major.
    Points {
        #[command(flatten)]
        region: RegionArgs,

        /// Stop after printing this many points.
        #[arg(long = "limit", value_name = "N")]
        limit: Option<usize>,
    },

    /// Print whether a region contains a point.
    Contains {
        #[command(flatten)]
        region: RegionArgs,

        /// The point to test.
        #[arg(value_name = "X,Y,Z", allow_hyphen_values = true)]
        point: VectorArg,
    },

    /// Print the point of a region nearest to the given point.
    Nearest {
        #[command(flatten)]
        region: RegionArgs,

        /// The point to clamp into the region.
        #[arg(value_name = "X,Y,Z", allow_hyphen_values = true)]
        point: VectorArg,
    },

    /// Print the corners, size and volume of the intersection of two regions.
    Intersect {
        #[command(flatten)]
        region: RegionArgs,

        /// Least corner of the other region.
        #[arg(long = "other-min", value_name = "X,Y,Z", allow_hyphen_values = true)]
        other_min: VectorArg,

        /// Greatest corner of the other region, inclusive.
        #[arg(long = "other-max", value_name = "X,Y,Z", allow_hyphen_values = true)]
        other_max: VectorArg,
    },
}

impl Command {
    /// Convert the arguments into a [`Query`].
    ///
    /// Returns an error if a region's coordinates are not representable.
    pub(crate) fn to_query(&self) -> Result<Query, anyhow::Error> {
        Ok(match *self {
            Command::Info { ref region } => Query::Info(region.to_region()?),
            Command::Bounded {
                a: VectorArg(a),
                b: VectorArg(b),
            } => Query::Info(
                Region3i::checked_bounded(a, b).context("corners do not form a valid region")?,
            ),
            Command::Points { ref region, limit } => Query::Points {
                region: region.to_region()?,
                limit,
            },
            Command::Contains {
                ref region,
                point: VectorArg(point),
            } => Query::Contains {
                region: region.to_region()?,
                point,
            },
            Command::Nearest {
                ref region,
                point: VectorArg(point),
            } => Query::Nearest {
                region: region.to_region()?,
                point,
            },
            Command::Intersect {
                ref region,
                other_min: VectorArg(other_min),
                other_max: VectorArg(other_max),
            } => Query::Intersect(
                region.to_region()?,
                Region3i::checked_from_min_max(other_min, other_max)
                    .context("--other-min and --other-max do not form a valid region")?,
            ),
        })
    }
}

/// A region given as its least corner and either its greatest corner or its size.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct RegionArgs {
    /// Least corner of the region.
    #[arg(long = "min", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub(crate) min: VectorArg,

    /// Greatest corner of the region, inclusive.
    #[arg(
        long = "max",
        value_name = "X,Y,Z",
        allow_hyphen_values = true,
        conflicts_with = "size",
        required_unless_present = "size"
    )]
    pub(crate) max: Option<VectorArg>,

    /// Number of points along each axis. Zero or negative values give an empty region.
    #[arg(
        long = "size",
        value_name = "X,Y,Z",
        allow_hyphen_values = true,
        required_unless_present = "max"
    )]
    pub(crate) size: Option<VectorArg>,
}

impl RegionArgs {
    pub(crate) fn to_region(&self) -> Result<Region3i, anyhow::Error> {
        let VectorArg(min) = self.min;
        match (self.max, self.size) {
            (Some(VectorArg(max)), _) => Region3i::checked_from_min_max(min, max)
                .context("--min and --max do not form a valid region"),
            (None, Some(VectorArg(size))) => Region3i::checked_from_min_and_size(min, size)
                .context("--min and --size do not form a valid region"),
            (None, None) => Err(anyhow::anyhow!("either --max or --size must be given")),
        }
    }
}

/// A vector of three integers, written like `1,2,3`, `1;2;3`, `"1 2 3"`, or `1x2x3`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct VectorArg(pub IntVector3);

impl FromStr for VectorArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: [LatticeCoordinate; 3] = s
            .split(&['×', 'x', ',', ';', ' '][..])
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<LatticeCoordinate>()
                    .map_err(|_| format!("{s:?} not an integer"))
            })
            .collect::<Result<Vec<LatticeCoordinate>, String>>()?
            .try_into()
            .map_err(|_| String::from("must be three integers"))?;
        Ok(VectorArg(IntVector3::from(components)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> clap::error::Result<ToolArgs> {
        ToolArgs::try_parse_from(std::iter::once("lattice-region").chain(args.iter().copied()))
    }

    fn parse_query(args: &[&str]) -> Query {
        parse(args).unwrap().command.to_query().unwrap()
    }

    #[test]
    fn vector_formats() {
        let expected = Ok(VectorArg(IntVector3::new(1, -2, 3)));
        assert_eq!("1,-2,3".parse::<VectorArg>(), expected);
        assert_eq!("1;-2;3".parse::<VectorArg>(), expected);
        assert_eq!("1 -2 3".parse::<VectorArg>(), expected);
        assert_eq!("1, -2, 3".parse::<VectorArg>(), expected);
        assert_eq!("1x-2x3".parse::<VectorArg>(), expected);
        assert_eq!("1×-2×3".parse::<VectorArg>(), expected);
    }

    #[test]
    fn vector_errors() {
        assert_eq!(
            "1,2".parse::<VectorArg>(),
            Err(String::from("must be three integers"))
        );
        assert_eq!(
            "1,2,3,4".parse::<VectorArg>(),
            Err(String::from("must be three integers"))
        );
        assert_eq!(
            "1,two,3".parse::<VectorArg>(),
            Err(String::from("\"two\" not an integer"))
        );
        assert_eq!(
            "1,2,99999999999".parse::<VectorArg>(),
            Err(String::from("\"99999999999\" not an integer"))
        );
    }

    #[test]
    fn info_with_max() {
        assert_eq!(
            parse_query(&["info", "--min", "0,0,0", "--max", "4,4,4"]),
            Query::Info(Region3i::from_min_max([0, 0, 0], [4, 4, 4]))
        );
    }

    #[test]
    fn info_with_size_and_negative_min() {
        assert_eq!(
            parse_query(&["info", "--min", "-1,-2,-3", "--size", "2,2,2"]),
            Query::Info(Region3i::from_min_and_size([-1, -2, -3], [2, 2, 2]))
        );
    }

    #[test]
    fn region_needs_max_or_size() {
        let e = parse(&["info", "--min", "0,0,0"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn region_max_conflicts_with_size() {
        let e = parse(&[
            "info", "--min", "0,0,0", "--max", "1,1,1", "--size", "1,1,1",
        ])
        .unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn invalid_vector_is_value_validation_error() {
        let e = parse(&["info", "--min", "0,0", "--max", "1,1,1"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::ValueValidation);
        assert!(e.to_string().contains("must be three integers"), "{e}");
    }

    #[test]
    fn overflowing_region_is_error() {
        let error = parse(&["info", "--min", "2147483647,0,0", "--size", "2,1,1"])
            .unwrap()
            .command
            .to_query()
            .unwrap_err();
        assert_eq!(
            format!("{error:#}"),
            "--min and --size do not form a valid region: \
            region min (+2147483647, +0, +0) plus size (+2, +1, +1) overflows"
        );
    }

    #[test]
    fn bounded() {
        assert_eq!(
            parse_query(&["bounded", "4,107,0", "-2,4,-16"]),
            Query::Info(Region3i::from_min_max([-2, 4, -16], [4, 107, 0]))
        );
    }

    #[test]
    fn points_with_limit() {
        assert_eq!(
            parse_query(&["points", "--min", "0,0,0", "--size", "3,3,3", "--limit", "5"]),
            Query::Points {
                region: Region3i::from_min_and_size([0, 0, 0], [3, 3, 3]),
                limit: Some(5),
            }
        );
    }

    #[test]
    fn contains_and_nearest() {
        let region = Region3i::from_min_max([0, 0, 0], [4, 4, 4]);
        assert_eq!(
            parse_query(&["contains", "--min", "0,0,0", "--max", "4,4,4", "-1,2,2"]),
            Query::Contains {
                region,
                point: IntVector3::new(-1, 2, 2),
            }
        );
        assert_eq!(
            parse_query(&["nearest", "--min", "0,0,0", "--max", "4,4,4", "15,12,7"]),
            Query::Nearest {
                region,
                point: IntVector3::new(15, 12, 7),
            }
        );
    }

    #[test]
    fn intersect() {
        assert_eq!(
            parse_query(&[
                "intersect",
                "--min",
                "0,0,0",
                "--max",
                "32,32,32",
                "--other-min",
                "1,1,1",
                "--other-max",
                "17,17,17",
            ]),
            Query::Intersect(
                Region3i::from_min_max([0, 0, 0], [32, 32, 32]),
                Region3i::from_min_max([1, 1, 1], [17, 17, 17]),
            )
        );
    }

    #[test]
    fn verbose_before_subcommand() {
        let args = parse(&["-v", "info", "--min", "0,0,0", "--max", "0,0,0"]).unwrap();
        assert!(args.logging.verbose);
    }
}
