//! Major-airport lookup table backing origin/destination selection.

use serde::Serialize;

/// Airport metadata for the search form's lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub iata: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

const MAJOR_AIRPORTS: &[Airport] = &[
    Airport {
        iata: "ATL",
        name: "Hartsfield-Jackson Atlanta International Airport",
        city: "Atlanta, Georgia",
        country: "United States",
    },
    Airport {
        iata: "DXB",
        name: "Dubai International Airport",
        city: "Garhoud, Dubai",
        country: "United Arab Emirates",
    },
    Airport {
        iata: "DFW",
        name: "Dallas Fort Worth International Airport",
        city: "Dallas - Fort Worth, Texas",
        country: "United States",
    },
    Airport {
        iata: "HND",
        name: "Tokyo Haneda Airport",
        city: "Ota, Tokyo",
        country: "Japan",
    },
    Airport {
        iata: "LHR",
        name: "Heathrow Airport",
        city: "Hillingdon, London",
        country: "United Kingdom",
    },
    Airport {
        iata: "DEN",
        name: "Denver International Airport",
        city: "Denver, Colorado",
        country: "United States",
    },
    Airport {
        iata: "IST",
        name: "Istanbul Airport",
        city: "Arnavutkoy, Istanbul",
        country: "Turkey",
    },
    Airport {
        iata: "ORD",
        name: "O'Hare International Airport",
        city: "Chicago, Illinois",
        country: "United States",
    },
    Airport {
        iata: "DEL",
        name: "Indira Gandhi International Airport",
        city: "Palam, Delhi",
        country: "India",
    },
    Airport {
        iata: "PVG",
        name: "Shanghai Pudong International Airport",
        city: "Pudong, Shanghai",
        country: "China",
    },
    Airport {
        iata: "LAX",
        name: "Los Angeles International Airport",
        city: "Los Angeles, California",
        country: "United States",
    },
    Airport {
        iata: "CAN",
        name: "Guangzhou Baiyun International Airport",
        city: "Baiyun-Huadu, Guangzhou, Guangdong",
        country: "China",
    },
    Airport {
        iata: "ICN",
        name: "Seoul Incheon International Airport",
        city: "Jung District, Incheon",
        country: "South Korea",
    },
    Airport {
        iata: "CDG",
        name: "Charles de Gaulle Airport",
        city: "Roissy-en-France, Ile-de-France",
        country: "France",
    },
    Airport {
        iata: "SIN",
        name: "Singapore Changi Airport",
        city: "Changi, East Region",
        country: "Singapore",
    },
    Airport {
        iata: "PEK",
        name: "Beijing Capital International Airport",
        city: "Chaoyang-Shunyi, Beijing",
        country: "China",
    },
    Airport {
        iata: "AMS",
        name: "Amsterdam Airport Schiphol",
        city: "Haarlemmermeer, North Holland",
        country: "Netherlands",
    },
    Airport {
        iata: "MAD",
        name: "Adolfo Suarez Madrid-Barajas Airport",
        city: "Community of Madrid, Barajas",
        country: "Spain",
    },
    Airport {
        iata: "JFK",
        name: "John F. Kennedy International Airport",
        city: "Queens, New York, New York",
        country: "United States",
    },
    Airport {
        iata: "FRA",
        name: "Frankfurt Airport",
        city: "Frankfurt, Hesse",
        country: "Germany",
    },
    Airport {
        iata: "SZX",
        name: "Shenzhen Bao'an International Airport",
        city: "Bao'an, Shenzhen, Guangdong",
        country: "China",
    },
    Airport {
        iata: "BKK",
        name: "Suvarnabhumi Airport",
        city: "Racha Thewa, Bangkok metro",
        country: "Thailand",
    },
    Airport {
        iata: "CLT",
        name: "Charlotte Douglas International Airport",
        city: "Charlotte, North Carolina",
        country: "United States",
    },
    Airport {
        iata: "LAS",
        name: "Harry Reid International Airport",
        city: "Las Vegas, Nevada",
        country: "United States",
    },
    Airport {
        iata: "MCO",
        name: "Orlando International Airport",
        city: "Orlando, Florida",
        country: "United States",
    },
    Airport {
        iata: "KUL",
        name: "Kuala Lumpur International Airport",
        city: "Sepang, Selangor",
        country: "Malaysia",
    },
    Airport {
        iata: "MIA",
        name: "Miami International Airport",
        city: "Miami-Dade County, Florida",
        country: "United States",
    },
    Airport {
        iata: "BCN",
        name: "Josep Tarradellas Barcelona-El Prat Airport",
        city: "Catalonia, El Prat de Llobregat",
        country: "Spain",
    },
    Airport {
        iata: "TFU",
        name: "Chengdu Tianfu International Airport",
        city: "Jianyang, Chengdu, Sichuan",
        country: "China",
    },
    Airport {
        iata: "CGK",
        name: "Soekarno-Hatta International Airport",
        city: "Tangerang, Banten",
        country: "Indonesia",
    },
    Airport {
        iata: "BOM",
        name: "Chhatrapati Shivaji Maharaj International Airport",
        city: "Santacruz-Sahar, Mumbai, Maharashtra",
        country: "India",
    },
    Airport {
        iata: "HKG",
        name: "Hong Kong International Airport",
        city: "Chek Lap Kok, New Territories",
        country: "China",
    },
    Airport {
        iata: "DOH",
        name: "Hamad International Airport",
        city: "Doha",
        country: "Qatar",
    },
    Airport {
        iata: "SEA",
        name: "Seattle-Tacoma International Airport",
        city: "SeaTac, Washington",
        country: "United States",
    },
    Airport {
        iata: "PHX",
        name: "Phoenix Sky Harbor International Airport",
        city: "Phoenix, Arizona",
        country: "United States",
    },
    Airport {
        iata: "SFO",
        name: "San Francisco International Airport",
        city: "San Mateo County, California",
        country: "United States",
    },
    Airport {
        iata: "MNL",
        name: "Ninoy Aquino International Airport",
        city: "Pasay / Paranaque, Metro Manila",
        country: "Philippines",
    },
    Airport {
        iata: "PKX",
        name: "Beijing Daxing International Airport",
        city: "Daxing District, Beijing",
        country: "China",
    },
    Airport {
        iata: "FCO",
        name: "Leonardo da Vinci Rome Fiumicino Airport",
        city: "Fiumicino, Metropolitan City of Rome, Lazio",
        country: "Italy",
    },
    Airport {
        iata: "JED",
        name: "King Abdulaziz International Airport",
        city: "Jeddah",
        country: "Saudi Arabia",
    },
    Airport {
        iata: "EWR",
        name: "Newark Liberty International Airport",
        city: "Newark, New Jersey",
        country: "United States",
    },
    Airport {
        iata: "CKG",
        name: "Chongqing Jiangbei International Airport",
        city: "Chongqing",
        country: "China",
    },
    Airport {
        iata: "IAH",
        name: "George Bush Intercontinental Airport",
        city: "Houston, Texas",
        country: "United States",
    },
    Airport {
        iata: "HGH",
        name: "Hangzhou Xiaoshan International Airport",
        city: "Hangzhou, Zhejiang",
        country: "China",
    },
    Airport {
        iata: "SHA",
        name: "Shanghai Hongqiao International Airport",
        city: "Shanghai",
        country: "China",
    },
    Airport {
        iata: "KMG",
        name: "Kunming Changshui International Airport",
        city: "Kunming, Yunnan",
        country: "China",
    },
    Airport {
        iata: "XIY",
        name: "Xian Xianyang International Airport",
        city: "Xian, Shaanxi",
        country: "China",
    },
    Airport {
        iata: "YYZ",
        name: "Toronto Pearson International Airport",
        city: "Mississauga, Ontario",
        country: "Canada",
    },
    Airport {
        iata: "BOG",
        name: "El Dorado International Airport",
        city: "Bogota",
        country: "Colombia",
    },
    Airport {
        iata: "MEX",
        name: "Mexico City International Airport",
        city: "Venustiano Carranza, Mexico City",
        country: "Mexico",
    },
];

/// The full table, in rough passenger-volume order.
pub fn major_airports() -> &'static [Airport] {
    MAJOR_AIRPORTS
}

/// Look up one airport by IATA code, case-insensitively.
pub fn find(iata: &str) -> Option<&'static Airport> {
    MAJOR_AIRPORTS
        .iter()
        .find(|airport| airport.iata.eq_ignore_ascii_case(iata))
}

/// Case-insensitive substring match over code, name, city, and country.
pub fn search(query: &str) -> Vec<&'static Airport> {
    let needle = query.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return MAJOR_AIRPORTS.iter().collect();
    }

    MAJOR_AIRPORTS
        .iter()
        .filter(|airport| {
            [airport.iata, airport.name, airport.city, airport.country]
                .iter()
                .any(|field| field.to_ascii_lowercase().contains(&needle))
        })
        .collect()
}
