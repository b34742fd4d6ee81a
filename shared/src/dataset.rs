//! Built-in crop dataset used when no dataset file is configured

use crate::models::Crop;

/// (name, start, end, yield in tonnes)
const DEFAULT_CROP_ROWS: [(&str, &str, &str, f64); 29] = [
    ("Баклажан", "08.08", "27.10", 285.0),
    ("Гарбуз батернат", "04.09", "03.11", 12.0),
    ("Гарбуз хокайдо", "15.08", "14.10", 12.0),
    ("Диня Амарілло", "20.08", "19.09", 6.0),
    ("Диня Пєль де Сапо", "31.07", "30.08", 6.0),
    ("Кабачок", "24.06", "19.08", 340.0),
    ("Кавун безнасіннєвий", "05.08", "25.08", 24.0),
    ("Кавун звичайний", "15.08", "25.08", 24.0),
    ("Капуста білоголова", "04.07", "25.09", 370.0),
    ("Капуста броколі", "14.06", "19.10", 178.0),
    ("Капуста цвітна біла", "25.06", "22.10", 320.0),
    ("Капуста цвітна жовта", "31.07", "22.10", 7.5),
    ("Капуста цвітна синя", "29.06", "22.10", 7.5),
    ("Капуста червоноголова", "04.07", "25.09", 36.0),
    ("Морква пізня", "07.09", "02.10", 660.0),
    ("Морква рання", "14.07", "03.08", 105.0),
    ("Огірок", "24.06", "23.08", 104.0),
    ("Перець Білозірка", "31.07", "29.09", 180.0),
    ("Перець гіркий", "31.07", "29.09", 30.0),
    ("Перець Куб жовтий", "31.07", "29.09", 15.0),
    ("Перець Куб червоний", "31.07", "29.09", 15.0),
    ("Перець Угорський", "10.08", "09.10", 60.0),
    ("Томат кумато", "29.07", "27.09", 3.0),
    ("Томат біф рожевий", "29.07", "27.09", 32.0),
    ("Томат зебра", "24.07", "27.09", 6.0),
    ("Томати сливка", "08.08", "27.09", 748.0),
    ("Томати чері", "24.07", "27.09", 18.0),
    ("Цибуля озима", "20.07", "04.08", 90.0),
    ("Цукіні", "24.06", "19.08", 12.0),
];

/// The default harvest plan, in authoring order
pub fn default_crops() -> Vec<Crop> {
    DEFAULT_CROP_ROWS
        .iter()
        .map(|(name, start, end, tonnes)| Crop::new(*name, *start, *end, *tonnes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_dataset;

    #[test]
    fn test_default_dataset_is_valid() {
        let crops = default_crops();
        assert_eq!(crops.len(), 29);
        assert!(validate_dataset(&crops, 2025, crate::types::WrapPolicy::Clamp).is_ok());
    }
}
