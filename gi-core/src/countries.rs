//! Static country-code display-name table
//!
//! ISO 3166-1 alpha-2 (lowercase) to English short name, used only at the
//! presentation boundary. Read-only configuration data; codes missing
//! from the table (or the empty key a null round code normalizes to)
//! resolve to no name.

/// Display name for a lowercase alpha-2 country code
pub fn country_name(code: &str) -> Option<&'static str> {
    match code {
        "ad" => Some("Andorra"),
        "ae" => Some("United Arab Emirates"),
        "af" => Some("Afghanistan"),
        "ag" => Some("Antigua and Barbuda"),
        "ai" => Some("Anguilla"),
        "al" => Some("Albania"),
        "am" => Some("Armenia"),
        "ao" => Some("Angola"),
        "aq" => Some("Antarctica"),
        "ar" => Some("Argentina"),
        "as" => Some("American Samoa"),
        "at" => Some("Austria"),
        "au" => Some("Australia"),
        "aw" => Some("Aruba"),
        "ax" => Some("Åland Islands"),
        "az" => Some("Azerbaijan"),
        "ba" => Some("Bosnia and Herzegovina"),
        "bb" => Some("Barbados"),
        "bd" => Some("Bangladesh"),
        "be" => Some("Belgium"),
        "bf" => Some("Burkina Faso"),
        "bg" => Some("Bulgaria"),
        "bh" => Some("Bahrain"),
        "bi" => Some("Burundi"),
        "bj" => Some("Benin"),
        "bl" => Some("Saint Barthélemy"),
        "bm" => Some("Bermuda"),
        "bn" => Some("Brunei Darussalam"),
        "bo" => Some("Bolivia (Plurinational State of)"),
        "bq" => Some("Bonaire, Sint Eustatius and Saba"),
        "br" => Some("Brazil"),
        "bs" => Some("Bahamas"),
        "bt" => Some("Bhutan"),
        "bv" => Some("Bouvet Island"),
        "bw" => Some("Botswana"),
        "by" => Some("Belarus"),
        "bz" => Some("Belize"),
        "ca" => Some("Canada"),
        "cc" => Some("Cocos (Keeling) Islands"),
        "cd" => Some("Congo (Democratic Republic of the)"),
        "cf" => Some("Central African Republic"),
        "cg" => Some("Congo"),
        "ch" => Some("Switzerland"),
        "ci" => Some("Côte d'Ivoire"),
        "ck" => Some("Cook Islands"),
        "cl" => Some("Chile"),
        "cm" => Some("Cameroon"),
        "cn" => Some("China"),
        "co" => Some("Colombia"),
        "cr" => Some("Costa Rica"),
        "cu" => Some("Cuba"),
        "cv" => Some("Cabo Verde"),
        "cw" => Some("Curaçao"),
        "cx" => Some("Christmas Island"),
        "cy" => Some("Cyprus"),
        "cz" => Some("Czechia"),
        "de" => Some("Germany"),
        "dj" => Some("Djibouti"),
        "dk" => Some("Denmark"),
        "dm" => Some("Dominica"),
        "do" => Some("Dominican Republic"),
        "dz" => Some("Algeria"),
        "ec" => Some("Ecuador"),
        "ee" => Some("Estonia"),
        "eg" => Some("Egypt"),
        "eh" => Some("Western Sahara"),
        "er" => Some("Eritrea"),
        "es" => Some("Spain"),
        "et" => Some("Ethiopia"),
        "fi" => Some("Finland"),
        "fj" => Some("Fiji"),
        "fk" => Some("Falkland Islands (Malvinas)"),
        "fm" => Some("Micronesia (Federated States of)"),
        "fo" => Some("Faroe Islands"),
        "fr" => Some("France"),
        "ga" => Some("Gabon"),
        "gb" => Some("United Kingdom of Great Britain and Northern Ireland"),
        "gd" => Some("Grenada"),
        "ge" => Some("Georgia"),
        "gf" => Some("French Guiana"),
        "gg" => Some("Guernsey"),
        "gh" => Some("Ghana"),
        "gi" => Some("Gibraltar"),
        "gl" => Some("Greenland"),
        "gm" => Some("Gambia"),
        "gn" => Some("Guinea"),
        "gp" => Some("Guadeloupe"),
        "gq" => Some("Equatorial Guinea"),
        "gr" => Some("Greece"),
        "gs" => Some("South Georgia and the South Sandwich Islands"),
        "gt" => Some("Guatemala"),
        "gu" => Some("Guam"),
        "gw" => Some("Guinea-Bissau"),
        "gy" => Some("Guyana"),
        "hk" => Some("Hong Kong"),
        "hm" => Some("Heard Island and McDonald Islands"),
        "hn" => Some("Honduras"),
        "hr" => Some("Croatia"),
        "ht" => Some("Haiti"),
        "hu" => Some("Hungary"),
        "id" => Some("Indonesia"),
        "ie" => Some("Ireland"),
        "il" => Some("Israel"),
        "im" => Some("Isle of Man"),
        "in" => Some("India"),
        "io" => Some("British Indian Ocean Territory"),
        "iq" => Some("Iraq"),
        "ir" => Some("Iran (Islamic Republic of)"),
        "is" => Some("Iceland"),
        "it" => Some("Italy"),
        "je" => Some("Jersey"),
        "jm" => Some("Jamaica"),
        "jo" => Some("Jordan"),
        "jp" => Some("Japan"),
        "ke" => Some("Kenya"),
        "kg" => Some("Kyrgyzstan"),
        "kh" => Some("Cambodia"),
        "ki" => Some("Kiribati"),
        "km" => Some("Comoros"),
        "kn" => Some("Saint Kitts and Nevis"),
        "kp" => Some("Korea (Democratic People's Republic of)"),
        "kr" => Some("Korea (Republic of)"),
        "kw" => Some("Kuwait"),
        "ky" => Some("Cayman Islands"),
        "kz" => Some("Kazakhstan"),
        "la" => Some("Lao People's Democratic Republic"),
        "lb" => Some("Lebanon"),
        "lc" => Some("Saint Lucia"),
        "li" => Some("Liechtenstein"),
        "lk" => Some("Sri Lanka"),
        "lr" => Some("Liberia"),
        "ls" => Some("Lesotho"),
        "lt" => Some("Lithuania"),
        "lu" => Some("Luxembourg"),
        "lv" => Some("Latvia"),
        "ly" => Some("Libya"),
        "ma" => Some("Morocco"),
        "mc" => Some("Monaco"),
        "md" => Some("Moldova (Republic of)"),
        "me" => Some("Montenegro"),
        "mf" => Some("Saint Martin (French part)"),
        "mg" => Some("Madagascar"),
        "mh" => Some("Marshall Islands"),
        "mk" => Some("North Macedonia"),
        "ml" => Some("Mali"),
        "mm" => Some("Myanmar"),
        "mn" => Some("Mongolia"),
        "mo" => Some("Macao"),
        "mp" => Some("Northern Mariana Islands"),
        "mq" => Some("Martinique"),
        "mr" => Some("Mauritania"),
        "ms" => Some("Montserrat"),
        "mt" => Some("Malta"),
        "mu" => Some("Mauritius"),
        "mv" => Some("Maldives"),
        "mw" => Some("Malawi"),
        "mx" => Some("Mexico"),
        "my" => Some("Malaysia"),
        "mz" => Some("Mozambique"),
        "na" => Some("Namibia"),
        "nc" => Some("New Caledonia"),
        "ne" => Some("Niger"),
        "nf" => Some("Norfolk Island"),
        "ng" => Some("Nigeria"),
        "ni" => Some("Nicaragua"),
        "nl" => Some("Netherlands"),
        "no" => Some("Norway"),
        "np" => Some("Nepal"),
        "nr" => Some("Nauru"),
        "nu" => Some("Niue"),
        "nz" => Some("New Zealand"),
        "om" => Some("Oman"),
        "pa" => Some("Panama"),
        "pe" => Some("Peru"),
        "pf" => Some("French Polynesia"),
        "pg" => Some("Papua New Guinea"),
        "ph" => Some("Philippines"),
        "pk" => Some("Pakistan"),
        "pl" => Some("Poland"),
        "pm" => Some("Saint Pierre and Miquelon"),
        "pn" => Some("Pitcairn"),
        "pr" => Some("Puerto Rico"),
        "ps" => Some("Palestine, State of"),
        "pt" => Some("Portugal"),
        "pw" => Some("Palau"),
        "py" => Some("Paraguay"),
        "qa" => Some("Qatar"),
        "re" => Some("Réunion"),
        "ro" => Some("Romania"),
        "rs" => Some("Serbia"),
        "ru" => Some("Russian Federation"),
        "rw" => Some("Rwanda"),
        "sa" => Some("Saudi Arabia"),
        "sb" => Some("Solomon Islands"),
        "sc" => Some("Seychelles"),
        "sd" => Some("Sudan"),
        "se" => Some("Sweden"),
        "sg" => Some("Singapore"),
        "sh" => Some("Saint Helena, Ascension and Tristan da Cunha"),
        "si" => Some("Slovenia"),
        "sj" => Some("Svalbard and Jan Mayen"),
        "sk" => Some("Slovakia"),
        "sl" => Some("Sierra Leone"),
        "sm" => Some("San Marino"),
        "sn" => Some("Senegal"),
        "so" => Some("Somalia"),
        "sr" => Some("Suriname"),
        "ss" => Some("South Sudan"),
        "st" => Some("Sao Tome and Principe"),
        "sv" => Some("El Salvador"),
        "sx" => Some("Sint Maarten (Dutch part)"),
        "sy" => Some("Syrian Arab Republic"),
        "sz" => Some("Eswatini"),
        "tc" => Some("Turks and Caicos Islands"),
        "td" => Some("Chad"),
        "tf" => Some("French Southern Territories"),
        "tg" => Some("Togo"),
        "th" => Some("Thailand"),
        "tj" => Some("Tajikistan"),
        "tk" => Some("Tokelau"),
        "tl" => Some("Timor-Leste"),
        "tm" => Some("Turkmenistan"),
        "tn" => Some("Tunisia"),
        "to" => Some("Tonga"),
        "tr" => Some("Turkey"),
        "tt" => Some("Trinidad and Tobago"),
        "tv" => Some("Tuvalu"),
        "tw" => Some("Taiwan, Province of China"),
        "tz" => Some("Tanzania, United Republic of"),
        "ua" => Some("Ukraine"),
        "ug" => Some("Uganda"),
        "um" => Some("United States Minor Outlying Islands"),
        "us" => Some("United States of America"),
        "uy" => Some("Uruguay"),
        "uz" => Some("Uzbekistan"),
        "va" => Some("Holy See"),
        "vc" => Some("Saint Vincent and the Grenadines"),
        "ve" => Some("Venezuela (Bolivarian Republic of)"),
        "vg" => Some("Virgin Islands (British)"),
        "vi" => Some("Virgin Islands (U.S.)"),
        "vn" => Some("Viet Nam"),
        "vu" => Some("Vanuatu"),
        "wf" => Some("Wallis and Futuna"),
        "ws" => Some("Samoa"),
        "ye" => Some("Yemen"),
        "yt" => Some("Mayotte"),
        "za" => Some("South Africa"),
        "zm" => Some("Zambia"),
        "zw" => Some("Zimbabwe"),        _ => None,
    }
}
