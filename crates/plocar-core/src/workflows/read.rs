use crate::core::io::header::read_header;
use crate::core::io::records::decode_records;
use crate::core::models::array::{FerwArray, PloArray};
use crate::core::models::header::Header;
use crate::core::models::params::ParameterBag;
use crate::engine::allocation::allocate_arrays;
use crate::engine::config::DecodeConfig;
use crate::engine::error::{FormatError, PlocarError};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::DecodeStage;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// File read when the caller does not name one.
pub const DEFAULT_PLOCAR_PATH: &str = "PLOCAR";

const STREAM_ORIGIN: &str = "<stream>";

/// Emits at `info` when the call asked for verbose diagnostics, at `debug` otherwise.
macro_rules! note {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!($($arg)+);
        } else {
            debug!($($arg)+);
        }
    };
}

/// The fully decoded contents of a PLOCAR file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlocarData {
    pub params: ParameterBag,
    pub plo: PloArray,
    pub ferw: FerwArray,
}

impl PlocarData {
    pub fn into_parts(self) -> (ParameterBag, PloArray, FerwArray) {
        (self.params, self.plo, self.ferw)
    }
}

/// Decodes the PLOCAR file at `path` (default [`DEFAULT_PLOCAR_PATH`]).
///
/// The file handle is owned by this call and released on every exit path. On error
/// nothing decoded so far is returned.
#[instrument(skip_all, name = "read_plocar")]
pub fn read_plocar(
    path: Option<&Path>,
    config: &DecodeConfig,
    reporter: &ProgressReporter,
) -> Result<PlocarData, PlocarError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_PLOCAR_PATH));
    note!(config.verbose, "Reading PLO data from file: {}", path.display());

    let file = File::open(path).map_err(|source| PlocarError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    run(&mut reader, config, reporter).map_err(|(stage, source)| PlocarError::Format {
        origin: path.display().to_string(),
        stage,
        source,
    })
}

/// Decodes a PLOCAR stream from any reader positioned at the start of the header.
#[instrument(skip_all, name = "read_plocar_stream")]
pub fn read_from(
    reader: &mut impl Read,
    config: &DecodeConfig,
    reporter: &ProgressReporter,
) -> Result<PlocarData, PlocarError> {
    run(reader, config, reporter).map_err(|(stage, source)| PlocarError::Format {
        origin: STREAM_ORIGIN.to_string(),
        stage,
        source,
    })
}

fn run(
    reader: &mut impl Read,
    config: &DecodeConfig,
    reporter: &ProgressReporter,
) -> Result<PlocarData, (DecodeStage, FormatError)> {
    let mut stage = DecodeStage::Idle;
    let result = decode(reader, config, reporter, &mut stage);
    if let Err(e) = &result {
        warn!("Decoding failed while {}: {}", stage, e);
        reporter.report(Progress::StageEntered(stage.fail()));
    }
    result.map_err(|e| (stage, e))
}

fn decode(
    reader: &mut impl Read,
    config: &DecodeConfig,
    reporter: &ProgressReporter,
    stage: &mut DecodeStage,
) -> Result<PlocarData, FormatError> {
    let header = read_header(reader)?;
    enter(stage, reporter);
    log_header(&header, config.verbose);

    let params = ParameterBag::from(&header);
    let (mut plo, mut ferw) = allocate_arrays(&header, config.max_elements)?;
    enter(stage, reporter);

    enter(stage, reporter);
    decode_records(reader, &header, &mut plo, &mut ferw, reporter)?;
    enter(stage, reporter);

    let mut probe = [0u8; 1];
    if matches!(reader.read(&mut probe), Ok(n) if n > 0) {
        debug!("Ignoring trailing data after the last ion block.");
    }

    note!(
        config.verbose,
        "Decoded {} PLO elements and {} Fermi weights.",
        plo.len(),
        ferw.len()
    );
    Ok(PlocarData { params, plo, ferw })
}

fn enter(stage: &mut DecodeStage, reporter: &ProgressReporter) {
    *stage = stage.advance();
    reporter.report(Progress::StageEntered(*stage));
}

fn log_header(header: &Header, verbose: bool) {
    note!(verbose, "Data in {} precision", header.precision);
    note!(verbose, "nion: {}", header.nion);
    note!(verbose, "ns: {}", header.ns);
    note!(verbose, "nk: {}", header.nk);
    note!(verbose, "nb: {}", header.nb);
    note!(verbose, "nlmmax: {}", header.nlmmax);
    note!(verbose, "nc_flag: {}", header.nc_flag);
}
