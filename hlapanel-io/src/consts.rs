pub const LOCUS_COLUMN: &str = "locus";
pub const ALLELE_COLUMN: &str = "allele";
pub const FREQUENCY_COLUMN: &str = "frequency";
pub const POPULATION_COLUMN: &str = "population";

pub const REQUIRED_COLUMNS: [&str; 3] = [ALLELE_COLUMN, FREQUENCY_COLUMN, LOCUS_COLUMN];

// NetMHCpan-4.1 MHC_allele_names.txt
pub const NETMHCPAN_PREFIXES: [&str; 3] = ["HLA-A", "HLA-B", "HLA-C"];

// NetMHCIIpan-4.3 alleles_name.txt
pub const NETMHCIIPAN_HEADER_PREFIX: &str = "DR ";
pub const NETMHCIIPAN_COMMENT_PREFIX: &str = "#";
pub const DRB1_PREFIX: &str = "DRB1*";
pub const DQB1_PREFIX: &str = "DQB1*";
pub const DPB1_PREFIX: &str = "DPB1*";

pub const PANEL_DELIMITER: &str = ",";

// AFND dump columns
pub const AFND_GROUP_COLUMN: &str = "group";
pub const AFND_GENE_COLUMN: &str = "gene";
pub const AFND_ALLELE_COLUMN: &str = "allele";
pub const AFND_FREQUENCY_COLUMN: &str = "alleles_over_2n";
pub const AFND_POPULATION_COLUMN: &str = "population";
pub const AFND_HLA_GROUP: &str = "hla";
