use clap::{Parser, Subcommand};
use milan_base::{
    Nakshatra, Rashi, nakshatra_gana, nakshatra_lord, nakshatra_nadi, nakshatra_yoni, rashi_lord,
    rashi_varna, rashi_vashya, tara_from_nakshatras,
};
use milan_engine::{BirthChart, compute_match};

#[derive(Parser)]
#[command(name = "milan", about = "Ashtakoot kundali matching CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a groom/bride pairing across the eight kootas
    Match {
        /// Groom Moon nakshatra index (0 = Ashwini .. 26 = Revati)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=26))]
        groom_nakshatra: u8,
        /// Groom Moon rashi index (0 = Mesha .. 11 = Meena)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
        groom_rashi: u8,
        /// Bride Moon nakshatra index (0 = Ashwini .. 26 = Revati)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=26))]
        bride_nakshatra: u8,
        /// Bride Moon rashi index (0 = Mesha .. 11 = Meena)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
        bride_rashi: u8,
        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the reference-table attributes for one fingerprint
    Chart {
        /// Moon nakshatra index (0 = Ashwini .. 26 = Revati)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=26))]
        nakshatra: u8,
        /// Moon rashi index (0 = Mesha .. 11 = Meena)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
        rashi: u8,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            groom_nakshatra,
            groom_rashi,
            bride_nakshatra,
            bride_rashi,
            json,
        } => {
            let groom = BirthChart::from_indices(groom_nakshatra, groom_rashi);
            let bride = BirthChart::from_indices(bride_nakshatra, bride_rashi);
            let result = compute_match(groom, bride);

            if json {
                let rendered = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
                    eprintln!("Failed to render JSON: {e}");
                    std::process::exit(1);
                });
                println!("{rendered}");
                return;
            }

            println!(
                "Groom: {} / {}",
                groom.nakshatra.name(),
                groom.rashi.name()
            );
            println!(
                "Bride: {} / {}",
                bride.nakshatra.name(),
                bride.rashi.name()
            );
            println!();
            println!(
                "{:<10} {:>6} {:>5}  {:<18} {:<18} {}",
                "Koota", "Points", "Max", "Groom", "Bride", "Dosha"
            );
            for k in result.kootas {
                println!(
                    "{:<10} {:>6} {:>5}  {:<18} {:<18} {}",
                    k.id.id(),
                    k.points,
                    k.max_points,
                    k.groom_value,
                    k.bride_value,
                    if k.has_dosha { "yes" } else { "" }
                );
            }
            println!();
            println!(
                "Tara: {}",
                tara_from_nakshatras(groom.nakshatra, bride.nakshatra).name()
            );
            println!(
                "Total: {} / {} ({}%)",
                result.total_points, result.max_points, result.percentage
            );
            println!(
                "Interpretation: {} ({})",
                result.interpretation.id(),
                result.interpretation.description()
            );
            if result.nadi_dosha {
                println!("Nadi dosha present; remedies: {}", result.nadi_remedies().join(", "));
            }
            if let Some(dosha) = result.bhakoot_dosha {
                println!(
                    "Bhakoot dosha {}; remedies: {}",
                    dosha.id(),
                    result.bhakoot_remedies().join(", ")
                );
            }
        }
        Commands::Chart { nakshatra, rashi } => {
            let nak = Nakshatra::from_index(nakshatra);
            let rashi = Rashi::from_index(rashi);
            println!("Nakshatra: {} (index {})", nak.name(), nak.index());
            println!("  lord:  {}", nakshatra_lord(nak).name());
            println!("  gana:  {}", nakshatra_gana(nak).name());
            println!("  yoni:  {}", nakshatra_yoni(nak).name());
            println!("  nadi:  {}", nakshatra_nadi(nak).name());
            println!(
                "Rashi: {} / {} (index {})",
                rashi.name(),
                rashi.western_name(),
                rashi.index()
            );
            println!("  lord:   {}", rashi_lord(rashi).name());
            println!("  varna:  {}", rashi_varna(rashi).name());
            println!("  vashya: {}", rashi_vashya(rashi).name());
        }
    }
}
