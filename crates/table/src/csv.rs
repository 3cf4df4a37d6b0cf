use crate::error::Result;
use crate::table::Table;
use slate_types::{DataType, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// CSV reader/writer options.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',').
    pub delimiter: u8,
    /// Whether the first row contains column names (default: true).
    pub has_headers: bool,
    /// Quote character (default: '"').
    pub quote: u8,
    /// Explicit column types; when `None`, types are inferred.
    pub column_types: Option<Vec<DataType>>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            has_headers: true,
            quote: b'"',
            column_types: None,
        }
    }
}

impl CsvOptions {
    /// Options for TSV (tab-separated values).
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Set the delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first row contains column names.
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set explicit column types instead of inferring them.
    #[must_use]
    pub fn with_column_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = DataType>,
    {
        self.column_types = Some(types.into_iter().collect());
        self
    }
}

impl Table {
    /// Load a table from a CSV file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Load a table from a CSV file with custom options.
    pub fn from_csv_with_options<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Self::from_csv_reader(reader, options)
    }

    /// Load a table from a CSV string.
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes(), CsvOptions::default())
    }

    /// Load a table from a reader.
    ///
    /// Every field runs through the validated construction pipeline: the
    /// header row (when present) becomes the column names, and cells are
    /// cast by the explicit or inferred column types.
    pub fn from_csv_reader<R: Read>(reader: R, options: CsvOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .flexible(true)
            .has_headers(false) // We handle headers ourselves
            .from_reader(reader);

        let mut header: Option<Vec<String>> = None;
        let mut raw_rows: Vec<Vec<Value>> = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            if options.has_headers && header.is_none() {
                header = Some(record.iter().map(str::to_string).collect());
                continue;
            }
            raw_rows.push(record.iter().map(|field| Value::from(field)).collect());
        }

        let mut builder = Table::builder(raw_rows);
        if let Some(names) = header {
            builder = builder.column_names(names);
        }
        if let Some(types) = options.column_types {
            builder = builder.column_types(types);
        }
        builder.build()
    }

    /// Save the table to a CSV file.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_csv_with_options(path, CsvOptions::default())
    }

    /// Save the table to a CSV file with custom options.
    pub fn to_csv_with_options<P: AsRef<Path>>(&self, path: P, options: CsvOptions) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_csv(writer, options)
    }

    /// Write the table to a writer as CSV.
    pub fn write_csv<W: Write>(&self, writer: W, options: CsvOptions) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .from_writer(writer);

        if options.has_headers && !self.column_names().is_empty() {
            csv_writer.write_record(self.column_names())?;
        }

        for row in self.rows() {
            let record: Vec<String> = row.iter().map(Value::as_str).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render the table as a CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer, CsvOptions::default())?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
