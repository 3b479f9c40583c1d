//! Streaming reader for consumer raw-genotype exports.
//!
//! Handles 23andMe (4 columns), AncestryDNA (5 columns, split alleles) and FamilyTreeDNA
//! (quoted CSV) layouts, plain or compressed. Only catalog positions are kept.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiResult, ProgressCallback, ProgressEvent};
use crate::catalog::{is_no_call, normalize_genotype, Catalog};
use crate::types::{GenomeBuild, Source};

pub const DEFAULT_HEADER_SCAN_LINES: usize = 50;
const PROGRESS_EVERY: u64 = 100_000;
const TASK: &str = "Parsing genotype file";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenotypeCall {
    pub rsid: String,
    pub chromosome: String,
    pub position: u64,
    /// Normalized genotype, alleles sorted.
    pub genotype: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_processed: u64,
    pub comment_lines: u64,
    pub malformed_lines: u64,
    /// Well-formed genotype rows, no-calls included.
    pub snp_count: u64,
    pub no_calls: u64,
    pub duplicate_calls: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedGenome {
    pub source: Source,
    pub build: GenomeBuild,
    pub stats: ParseStats,
    /// Monitored calls in file order, first occurrence of each rsid only.
    pub calls: Vec<GenotypeCall>,
    /// Monitored rsids present in the file with a no-call genotype.
    pub unavailable: Vec<String>,
}

pub struct GenotypeParser<'a> {
    catalog: &'a Catalog,
    header_scan_lines: usize,
    progress_callback: Option<ProgressCallback>,
}

impl<'a> GenotypeParser<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            header_scan_lines: DEFAULT_HEADER_SCAN_LINES,
            progress_callback: None,
        }
    }

    pub fn with_header_scan_lines(mut self, lines: usize) -> Self {
        self.header_scan_lines = lines.max(1);
        self
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    fn emit_progress(&self, event: ProgressEvent) {
        if let Some(callback) = &self.progress_callback {
            callback(event);
        }
    }

    /// Parses a raw export. Compression is detected from magic bytes.
    pub fn parse<R: Read + 'a>(&self, input: R) -> ApiResult<ParsedGenome> {
        let (reader, format) = niffler::get_reader(Box::new(input)).map_err(|e| match e {
            niffler::Error::FileTooShort => {
                ApiError::UnsupportedFormat("file is empty or too short".to_string())
            }
            niffler::Error::IOError(io) => ApiError::from(io),
            other => ApiError::UnsupportedFormat(format!("cannot open compressed stream ({})", other)),
        })?;
        tracing::debug!(?format, "detected upload compression");

        self.emit_progress(ProgressEvent::Started {
            task: TASK.to_string(),
        });
        let parsed = self.parse_lines(BufReader::new(reader))?;
        self.emit_progress(ProgressEvent::Message {
            task: TASK.to_string(),
            message: format!(
                "{} export, build {}, {} monitored calls",
                parsed.source,
                parsed.build.number(),
                parsed.calls.len()
            ),
        });
        self.emit_progress(ProgressEvent::Completed {
            task: TASK.to_string(),
        });

        tracing::info!(
            source = %parsed.source,
            build = parsed.build.number(),
            lines = parsed.stats.lines_processed,
            snps = parsed.stats.snp_count,
            malformed = parsed.stats.malformed_lines,
            monitored = parsed.calls.len(),
            "parsed genotype file"
        );
        Ok(parsed)
    }

    fn parse_lines<B: BufRead>(&self, mut reader: B) -> ApiResult<ParsedGenome> {
        let mut stats = ParseStats::default();
        let mut header_text = String::new();
        let mut recognized = false;
        let mut csv_header = false;
        let mut calls = Vec::new();
        let mut unavailable = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut buf = Vec::with_capacity(128);

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            stats.lines_processed += 1;
            if stats.lines_processed % PROGRESS_EVERY == 0 {
                self.emit_progress(ProgressEvent::Progress {
                    task: TASK.to_string(),
                    current: stats.lines_processed,
                    total: 0,
                });
            }

            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']).trim_start_matches('\u{feff}');

            if line.trim().is_empty() {
                stats.comment_lines += 1;
            } else if line.starts_with('#') {
                stats.comment_lines += 1;
                if Source::from_header(line).is_some() {
                    recognized = true;
                }
                header_text.push_str(line);
                header_text.push('\n');
            } else {
                let fields = split_fields(line);
                if is_column_header(&fields) {
                    stats.comment_lines += 1;
                    recognized = true;
                    csv_header |= line.contains(',');
                } else {
                    match parse_row(&fields) {
                        Some(call) => {
                            recognized = true;
                            stats.snp_count += 1;
                            let no_call = is_no_call(&call.genotype);
                            if no_call {
                                stats.no_calls += 1;
                            }
                            if self.catalog.contains(&call.rsid) {
                                if !seen.insert(call.rsid.to_ascii_lowercase()) {
                                    stats.duplicate_calls += 1;
                                } else if no_call {
                                    unavailable.push(call.rsid);
                                } else {
                                    calls.push(call);
                                }
                            }
                        }
                        None => stats.malformed_lines += 1,
                    }
                }
            }

            if !recognized && stats.lines_processed >= self.header_scan_lines as u64 {
                return Err(ApiError::UnsupportedFormat(format!(
                    "no genotype header or rows found in the first {} lines",
                    self.header_scan_lines
                )));
            }
        }

        if !recognized {
            return Err(ApiError::UnsupportedFormat(
                "no genotype header or rows found".to_string(),
            ));
        }

        let source = Source::from_header(&header_text).unwrap_or(if csv_header {
            Source::FamilyTreeDna
        } else {
            Source::Unknown
        });
        let build = GenomeBuild::from_header(&header_text).unwrap_or_default();

        Ok(ParsedGenome {
            source,
            build,
            stats,
            calls,
            unavailable,
        })
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    let delimiter = if line.contains('\t') { '\t' } else { ',' };
    line.split(delimiter)
        .map(|field| field.trim().trim_matches('"').trim())
        .collect()
}

fn is_column_header(fields: &[&str]) -> bool {
    fields
        .first()
        .map(|f| f.eq_ignore_ascii_case("rsid"))
        .unwrap_or(false)
}

fn is_rsid_like(id: &str) -> bool {
    let lower = id.to_ascii_lowercase();
    let digits = lower
        .strip_prefix("rs")
        .or_else(|| lower.strip_prefix('i'))
        .unwrap_or("");
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_row(fields: &[&str]) -> Option<GenotypeCall> {
    let genotype = match fields.len() {
        4 => fields[3].to_string(),
        5 => format!("{}{}", fields[3], fields[4]),
        _ => return None,
    };
    if !is_rsid_like(fields[0]) || fields[1].is_empty() {
        return None;
    }
    let position = fields[2].parse::<u64>().ok()?;
    Some(GenotypeCall {
        rsid: fields[0].to_string(),
        chromosome: fields[1].to_string(),
        position,
        genotype: normalize_genotype(&genotype),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};

    const HEADER_23ANDME: &str = "# This data file generated by 23andMe at: Thu Jan 04 2024\n\
        # We are using reference human assembly build 37 (also known as Annotation Release 104).\n\
        # rsid\tchromosome\tposition\tgenotype\n";

    fn parse(text: &str) -> ApiResult<ParsedGenome> {
        let catalog = Catalog::builtin();
        GenotypeParser::new(&catalog).parse(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn reports_detected_source_through_progress() {
        let catalog = Catalog::builtin();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let text = format!("{}rs4988235\t2\t136608646\tAG\n", HEADER_23ANDME);
        GenotypeParser::new(&catalog)
            .with_progress(Arc::new(move |event: ProgressEvent| sink.lock().unwrap().push(event)))
            .parse(Cursor::new(text.into_bytes()))
            .unwrap();

        let events = events.lock().unwrap();
        assert!(matches!(events.first(), Some(ProgressEvent::Started { .. })));
        assert!(matches!(events.last(), Some(ProgressEvent::Completed { .. })));
        let message = events
            .iter()
            .find_map(|event| match event {
                ProgressEvent::Message { message, .. } => Some(message.clone()),
                _ => None,
            })
            .expect("source message emitted");
        assert!(message.contains("build 37"), "{}", message);
        assert!(message.contains("1 monitored"), "{}", message);
    }

    #[test]
    fn parses_single_monitored_line() {
        let text = format!("{}rs4988235\t2\t136608646\tAG\n", HEADER_23ANDME);
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.source, Source::TwentyThreeAndMe);
        assert_eq!(parsed.build, GenomeBuild::GRCh37);
        assert_eq!(parsed.stats.snp_count, 1);
        assert_eq!(parsed.calls.len(), 1);
        assert_eq!(parsed.calls[0].genotype, "AG");
        assert_eq!(parsed.calls[0].position, 136_608_646);
    }

    #[test]
    fn filters_unmonitored_and_counts_malformed() {
        let text = format!(
            "{}rs0000001\t1\t100\tAA\nrs4988235\t2\t136608646\tGA\nbroken line\nrs762551\t15\t75041917\n",
            HEADER_23ANDME
        );
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.stats.snp_count, 2);
        assert_eq!(parsed.stats.malformed_lines, 2);
        assert_eq!(parsed.calls.len(), 1);
        assert_eq!(parsed.calls[0].genotype, "AG");
    }

    #[test]
    fn no_calls_are_not_available() {
        let text = format!(
            "{}rs4988235\t2\t136608646\t--\nrs671\t12\t112241766\tGG\n",
            HEADER_23ANDME
        );
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.stats.no_calls, 1);
        assert_eq!(parsed.unavailable, vec!["rs4988235".to_string()]);
        assert_eq!(parsed.calls.len(), 1);
        assert_eq!(parsed.calls[0].rsid, "rs671");
    }

    #[test]
    fn first_duplicate_wins() {
        let text = format!(
            "{}rs671\t12\t112241766\tGG\nrs671\t12\t112241766\tAA\n",
            HEADER_23ANDME
        );
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.calls.len(), 1);
        assert_eq!(parsed.calls[0].genotype, "GG");
        assert_eq!(parsed.stats.duplicate_calls, 1);
    }

    #[test]
    fn ancestry_layout_joins_alleles() {
        let text = "#AncestryDNA raw data download\n\
            #reference build 37.1\n\
            rsid\tchromosome\tposition\tallele1\tallele2\n\
            rs4988235\t2\t136608646\tG\tA\n\
            rs7041\t4\t72618334\t0\t0\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.source, Source::AncestryDna);
        assert_eq!(parsed.calls.len(), 1);
        assert_eq!(parsed.calls[0].genotype, "AG");
        assert_eq!(parsed.unavailable, vec!["rs7041".to_string()]);
    }

    #[test]
    fn quoted_csv_layout() {
        let text = "RSID,CHROMOSOME,POSITION,RESULT\n\"rs4988235\",\"2\",\"136608646\",\"CT\"\n";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.source, Source::FamilyTreeDna);
        assert_eq!(parsed.calls[0].genotype, "CT");
    }

    #[test]
    fn rejects_unrecognized_input() {
        let text = "name,age\nalice,30\nbob,40\n";
        assert!(matches!(parse(text), Err(ApiError::UnsupportedFormat(_))));

        let long: String = (0..200).map(|i| format!("garbage line {}\n", i)).collect();
        let catalog = Catalog::builtin();
        let result = GenotypeParser::new(&catalog)
            .with_header_scan_lines(10)
            .parse(Cursor::new(long.into_bytes()));
        assert!(matches!(result, Err(ApiError::UnsupportedFormat(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse(""), Err(ApiError::UnsupportedFormat(_))));
    }

    #[test]
    fn gzip_matches_plain() {
        let text = format!("{}rs4988235\t2\t136608646\tAG\nrs671\t12\t112241766\tAG\n", HEADER_23ANDME);
        let mut compressed = Vec::new();
        {
            let mut writer = niffler::get_writer(
                Box::new(&mut compressed),
                niffler::compression::Format::Gzip,
                niffler::Level::Six,
            )
            .unwrap();
            writer.write_all(text.as_bytes()).unwrap();
        }
        let catalog = Catalog::builtin();
        let from_gz = GenotypeParser::new(&catalog)
            .parse(Cursor::new(compressed))
            .unwrap();
        let from_plain = parse(&text).unwrap();
        assert_eq!(from_gz.calls, from_plain.calls);
        assert_eq!(from_gz.stats, from_plain.stats);
    }
}
