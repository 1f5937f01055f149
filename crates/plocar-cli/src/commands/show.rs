use super::decode_input;
use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use plocar::engine::config::DecodeConfig;
use plocar::workflows::read::PlocarData;
use std::fmt::Write;
use std::ops::Range;

/// Resolves an optional index against an axis, `None` meaning the whole axis.
fn select(index: Option<usize>, len: usize, axis: &str) -> Result<Range<usize>> {
    match index {
        None => Ok(0..len),
        Some(i) if i < len => Ok(i..i + 1),
        Some(i) => Err(CliError::Argument(format!(
            "{} index {} is out of range (the file has {} {}s)",
            axis, i, len, axis
        ))),
    }
}

fn render(data: &PlocarData, args: &ShowArgs) -> Result<String> {
    let [nion, ns, nk, nb] = data.ferw.shape();
    let ions = select(Some(args.ion), nion, "ion")?;
    let spins = select(args.spin, ns, "spin")?;
    let kpoints = select(args.kpoint, nk, "k-point")?;
    let bands = select(args.band, nb, "band")?;

    let mut out = String::new();
    for ion in ions {
        for is in spins.clone() {
            for ik in kpoints.clone() {
                for ib in bands.clone() {
                    let weight = data.ferw[[ion, is, ik, ib]];
                    writeln!(
                        out,
                        "ion {} spin {} k-point {} band {}: weight = {:.6}",
                        ion, is, ik, ib, weight
                    )
                    .map_err(|e| CliError::Other(e.into()))?;
                    for (ilm, z) in data.plo.lane(&[ion, is, ik, ib]).iter().enumerate() {
                        writeln!(out, "  {:>3} {:>14.8} {:+14.8}i", ilm, z.re, z.im)
                            .map_err(|e| CliError::Other(e.into()))?;
                    }
                }
            }
        }
    }
    Ok(out)
}

pub fn run(args: ShowArgs, config: &DecodeConfig, quiet: bool) -> Result<()> {
    let data = decode_input(args.input.as_deref(), config, quiet)?;
    print!("{}", render(&data, &args)?);
    Ok(())
}
