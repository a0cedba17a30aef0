// Test fixtures with realistic catalog rows
//
// Six events over three months and three regions:
//
// | id | date       | time     | mag | depth | remark                  |
// |----|------------|----------|-----|-------|-------------------------|
// | 1  | 2024-01-15 | 03:10:00 | 2.9 | 10    | Laut Banda              |
// | 2  | 2024-01-20 | 03:45:30 | 3.0 | 60    | Laut Banda              |
// | 3  | 2024-02-05 | 14:00:00 | 5.0 | 150   | Jawa Timur, Indonesia   |
// | 4  | 2024-02-05 | 22:30:00 | 4.2 | 35    | Maluku Utara            |
// | 5  | 2024-03-01 | 08:15:00 | 5.0 | 310   | Laut Banda              |
// | 6  | 2024-03-10 | 23:59:59 | 3.7 | 50    | Maluku Utara            |

pub const TOTAL_EVENTS: usize = 6;

pub const EARTHQUAKE_FIXTURES: &[&str] = &[
    r#"INSERT INTO earthquake (id, date, time, latitude, longitude, depth, magnitude, remark)
       VALUES (1, '2024-01-15', '03:10:00', -6.5, 129.5, 10, 2.9, 'Laut Banda')"#,
    r#"INSERT INTO earthquake (id, date, time, latitude, longitude, depth, magnitude, remark)
       VALUES (2, '2024-01-20', '03:45:30', -6.7, 129.9, 60, 3.0, 'Laut Banda')"#,
    r#"INSERT INTO earthquake (id, date, time, latitude, longitude, depth, magnitude, remark)
       VALUES (3, '2024-02-05', '14:00:00', -8.2, 112.6, 150, 5.0, 'Jawa Timur, Indonesia')"#,
    r#"INSERT INTO earthquake (id, date, time, latitude, longitude, depth, magnitude, remark)
       VALUES (4, '2024-02-05', '22:30:00', 1.1, 126.4, 35, 4.2, 'Maluku Utara')"#,
    r#"INSERT INTO earthquake (id, date, time, latitude, longitude, depth, magnitude, remark)
       VALUES (5, '2024-03-01', '08:15:00', -7.0, 130.1, 310, 5.0, 'Laut Banda')"#,
    r#"INSERT INTO earthquake (id, date, time, latitude, longitude, depth, magnitude, remark)
       VALUES (6, '2024-03-10', '23:59:59', 2.0, 127.0, 50, 3.7, 'Maluku Utara')"#,
];

/// Catalog file in the agency's export layout: three good rows and one
/// with a non-numeric magnitude on line 4.
pub const SOURCE_CSV: &str = "\
tgl,ot,lat,lon,depth,mag,remark
1/21/2018,22.48.13,-7.42,106.44,10,4.1,Jawa Barat
1/22/2018,01.02.03,-3.1,128.2,45,3.3,Laut Banda
1/22/2018,05.00.00,-3.2,128.4,20,x.y,Laut Banda
12/1/2019,13.14.15,-8.5,115.2,120,5.6,\"Bali, Indonesia\"
";
