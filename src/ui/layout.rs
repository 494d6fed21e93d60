//! Absolute row offsets for every section.
//!
//! Rows never reflow: a line that has nothing to show leaves its row blank.
//! Only the number of disks and the presence of a battery move the sections
//! below them.

pub const TITLE_ROW: u16 = 0;
pub const IDENTITY_ROW: u16 = 2;
pub const UPTIME_ROW: u16 = 3;
pub const CPU_BAR_ROW: u16 = 4;
pub const CPU_DETAIL_ROW: u16 = 5;
pub const MEMORY_BAR_ROW: u16 = 7;
pub const RAM_ROW: u16 = 8;
pub const SWAP_ROW: u16 = 9;
pub const STORAGE_HEADER_ROW: u16 = 11;
pub const FIRST_DISK_ROW: u16 = 12;
pub const ROWS_PER_DISK: u16 = 2;

/// Rows between `current_y` and the end of the table that are not process
/// rows: the three header lines plus the footer.
const PROCESS_TABLE_OVERHEAD: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rows {
    pub upload: u16,
    pub download: u16,
    pub battery: Option<u16>,
    /// Running-process count; the table title and column header follow it.
    pub current_y: u16,
}

impl Rows {
    pub fn compute(disk_count: usize, has_battery: bool) -> Self {
        let disk_count = u16::try_from(disk_count).unwrap_or(u16::MAX);
        let upload = FIRST_DISK_ROW
            .saturating_add(disk_count.saturating_mul(ROWS_PER_DISK))
            .saturating_add(1);
        let battery = has_battery.then(|| upload.saturating_add(3));
        let current_y = match battery {
            Some(row) => row.saturating_add(2),
            None => upload.saturating_add(3),
        };
        Self {
            upload,
            download: upload.saturating_add(1),
            battery,
            current_y,
        }
    }

    pub fn disk_row(index: usize) -> u16 {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        FIRST_DISK_ROW.saturating_add(index.saturating_mul(ROWS_PER_DISK))
    }

    pub fn process_title(&self) -> u16 {
        self.current_y.saturating_add(1)
    }

    pub fn process_header(&self) -> u16 {
        self.current_y.saturating_add(2)
    }

    pub fn first_process(&self) -> u16 {
        self.current_y.saturating_add(3)
    }

    /// How many process rows fit in a terminal `height` rows tall.
    pub fn process_capacity(&self, height: u16) -> usize {
        height.saturating_sub(self.current_y.saturating_add(PROCESS_TABLE_OVERHEAD)) as usize
    }
}

pub fn footer_row(height: u16) -> Option<u16> {
    height.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_without_disks_or_battery() {
        let rows = Rows::compute(0, false);
        assert_eq!(rows.upload, 13);
        assert_eq!(rows.download, 14);
        assert_eq!(rows.battery, None);
        assert_eq!(rows.current_y, 16);
    }

    #[test]
    fn test_rows_with_disks_and_battery() {
        let rows = Rows::compute(3, true);
        assert_eq!(Rows::disk_row(2), 16);
        assert_eq!(rows.upload, 19);
        assert_eq!(rows.battery, Some(22));
        assert_eq!(rows.current_y, 24);
        assert_eq!(rows.first_process(), 27);
    }

    #[test]
    fn test_process_capacity() {
        let rows = Rows::compute(1, false);
        // current_y = 18
        assert_eq!(rows.process_capacity(40), 40 - 18 - 4);
        assert_eq!(rows.process_capacity(22), 0);
        assert_eq!(rows.process_capacity(10), 0);
    }

    #[test]
    fn test_last_process_row_sits_above_footer() {
        let rows = Rows::compute(2, true);
        let height = 50;
        let capacity = rows.process_capacity(height) as u16;
        assert_eq!(rows.first_process() + capacity - 1, footer_row(height).unwrap() - 1);
    }

    #[test]
    fn test_footer_row() {
        assert_eq!(footer_row(24), Some(23));
        assert_eq!(footer_row(0), None);
    }
}
