use super::decode_input;
use crate::cli::InfoArgs;
use crate::error::{CliError, Result};
use plocar::core::models::params::ParameterBag;
use plocar::engine::config::DecodeConfig;
use plocar::workflows::read::PlocarData;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Summary {
    parameters: ParameterBag,
    arrays: ArraySummary,
}

#[derive(Debug, Serialize)]
struct ArraySummary {
    #[serde(rename = "plo-shape")]
    plo_shape: Vec<usize>,
    #[serde(rename = "ferw-shape")]
    ferw_shape: Vec<usize>,
    #[serde(rename = "nonzero-plo")]
    nonzero_plo: usize,
    #[serde(rename = "max-abs-plo")]
    max_abs_plo: f64,
    /// Sum of the Fermi weights of the first ion, one entry per spin.
    #[serde(rename = "weight-sums")]
    weight_sums: Vec<f64>,
}

fn summarize(data: &PlocarData) -> Summary {
    let plo = data.plo.as_slice();
    let nonzero_plo = plo.iter().filter(|z| z.re != 0.0 || z.im != 0.0).count();
    let max_abs_plo = plo.iter().map(|z| z.norm()).fold(0.0, f64::max);

    let [nion, ns, nk, nb] = data.ferw.shape();
    let weight_sums = if nion == 0 {
        Vec::new()
    } else {
        (0..ns)
            .map(|is| {
                (0..nk)
                    .flat_map(|ik| (0..nb).map(move |ib| (ik, ib)))
                    .map(|(ik, ib)| data.ferw[[0, is, ik, ib]])
                    .sum::<f64>()
            })
            .collect()
    };

    Summary {
        parameters: data.params,
        arrays: ArraySummary {
            plo_shape: data.plo.shape().to_vec(),
            ferw_shape: data.ferw.shape().to_vec(),
            nonzero_plo,
            max_abs_plo,
            weight_sums,
        },
    }
}

fn render(data: &PlocarData) -> Result<String> {
    toml::to_string_pretty(&summarize(data)).map_err(|e| CliError::Other(e.into()))
}

pub fn run(args: InfoArgs, config: &DecodeConfig, quiet: bool) -> Result<()> {
    let data = decode_input(args.input.as_deref(), config, quiet)?;
    print!("{}", render(&data)?);
    Ok(())
}
