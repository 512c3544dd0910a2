use std::fs::File;
use std::io::Write;

use crate::tables;
use crate::ucd;

pub mod format;
pub mod stats;

/// пишем таблицу классификации и статистику по ней
pub fn write(file: &mut File, stats_file: &mut File)
{
    let ranges = tables::prepare();

    let (major, minor, update) = ucd::UNICODE_VERSION;

    let output = format!(
        "ClusterBreakData {{\n    \
            unicode_version: ({}, {}, {}),\n    \
            ranges: &[\n{}    ],\n\
        }}\n",
        major,
        minor,
        update,
        format::format_range_vec(&ranges),
    );

    write!(file, "{}", output).unwrap();
    write!(stats_file, "{}", stats::format_stats(&ranges)).unwrap();

    stats::print(&ranges);
}
