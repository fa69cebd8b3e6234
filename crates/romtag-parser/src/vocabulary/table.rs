//! The filename token vocabulary.
//!
//! Keys are normalized tokens. Values are the canonical tags the token
//! stands for, often a region and a language at once.

use crate::model::TagType as T;

pub(super) type Entry = (T, &'static str);

pub(super) static TOKENS: phf::Map<&'static str, &'static [Entry]> = phf::phf_map! {
    // Regions, full names
    "world" => &[(T::Region, "world")],
    "europe" => &[(T::Region, "eu")],
    "asia" => &[(T::Region, "asia")],
    "australia" => &[(T::Region, "au"), (T::Lang, "en")],
    "brazil" => &[(T::Region, "br"), (T::Lang, "pt")],
    "canada" => &[(T::Region, "ca"), (T::Lang, "en")],
    "china" => &[(T::Region, "cn"), (T::Lang, "zh")],
    "france" => &[(T::Region, "fr"), (T::Lang, "fr")],
    "germany" => &[(T::Region, "de"), (T::Lang, "de")],
    "hong-kong" => &[(T::Region, "hk")],
    "italy" => &[(T::Region, "it"), (T::Lang, "it")],
    "japan" => &[(T::Region, "jp"), (T::Lang, "ja")],
    "korea" => &[(T::Region, "kr"), (T::Lang, "ko")],
    "netherlands" => &[(T::Region, "nl"), (T::Lang, "nl")],
    "spain" => &[(T::Region, "es"), (T::Lang, "es")],
    "sweden" => &[(T::Region, "se"), (T::Lang, "sv")],
    "usa" => &[(T::Region, "us"), (T::Lang, "en")],
    "poland" => &[(T::Region, "pl"), (T::Lang, "pl")],
    "finland" => &[(T::Region, "fi"), (T::Lang, "fi")],
    "denmark" => &[(T::Region, "dk"), (T::Lang, "da")],
    "portugal" => &[(T::Region, "pt"), (T::Lang, "pt")],
    "norway" => &[(T::Region, "no"), (T::Lang, "no")],
    // Region codes
    "ae" => &[(T::Region, "ae"), (T::Lang, "ar")],
    "al" => &[(T::Region, "al")],
    "as" => &[(T::Region, "as")],
    "at" => &[(T::Region, "at"), (T::Lang, "de")],
    "au" => &[(T::Region, "au"), (T::Lang, "en")],
    "ba" => &[(T::Region, "ba")],
    "be" => &[(T::Region, "be")],
    "bg" => &[(T::Region, "bg"), (T::Lang, "bg")],
    "br" => &[(T::Region, "br"), (T::Lang, "pt")],
    "ca" => &[(T::Region, "ca"), (T::Lang, "en")],
    "ch" => &[(T::Region, "ch")],
    "cl" => &[(T::Region, "cl"), (T::Lang, "es")],
    "cn" => &[(T::Region, "cn"), (T::Lang, "zh")],
    "cs" => &[(T::Region, "cs")],
    "cy" => &[(T::Region, "cy")],
    "cz" => &[(T::Region, "cz"), (T::Lang, "cs")],
    "de" => &[(T::Region, "de"), (T::Lang, "de")],
    "dk" => &[(T::Region, "dk"), (T::Lang, "da")],
    "ee" => &[(T::Region, "ee"), (T::Lang, "et")],
    "eg" => &[(T::Region, "eg"), (T::Lang, "ar")],
    "es" => &[(T::Region, "es"), (T::Lang, "es")],
    "eu" => &[(T::Region, "eu")],
    "fi" => &[(T::Region, "fi"), (T::Lang, "fi")],
    "fr" => &[(T::Region, "fr"), (T::Lang, "fr")],
    "gb" => &[(T::Region, "gb"), (T::Lang, "en")],
    "gr" => &[(T::Region, "gr"), (T::Lang, "el")],
    "hk" => &[(T::Region, "hk")],
    "hr" => &[(T::Region, "hr"), (T::Lang, "hr")],
    "hu" => &[(T::Region, "hu"), (T::Lang, "hu")],
    "id" => &[(T::Region, "id")],
    "ie" => &[(T::Region, "ie"), (T::Lang, "en")],
    "il" => &[(T::Region, "il"), (T::Lang, "he")],
    "in" => &[(T::Region, "in"), (T::Lang, "hi")],
    "ir" => &[(T::Region, "ir"), (T::Lang, "fa")],
    "is" => &[(T::Region, "is"), (T::Lang, "is")],
    "it" => &[(T::Region, "it"), (T::Lang, "it")],
    "jo" => &[(T::Region, "jo"), (T::Lang, "ar")],
    "jp" => &[(T::Region, "jp"), (T::Lang, "ja")],
    "kr" => &[(T::Region, "kr"), (T::Lang, "ko")],
    "lt" => &[(T::Region, "lt"), (T::Lang, "lt")],
    "lu" => &[(T::Region, "lu")],
    "lv" => &[(T::Region, "lv"), (T::Lang, "lv")],
    "mn" => &[(T::Region, "mn")],
    "mx" => &[(T::Region, "mx"), (T::Lang, "es")],
    "my" => &[(T::Region, "my"), (T::Lang, "ms")],
    "nl" => &[(T::Region, "nl"), (T::Lang, "nl")],
    "no" => &[(T::Region, "no"), (T::Lang, "no")],
    "np" => &[(T::Region, "np")],
    "nz" => &[(T::Region, "nz"), (T::Lang, "en")],
    "om" => &[(T::Region, "om"), (T::Lang, "ar")],
    "pe" => &[(T::Region, "pe"), (T::Lang, "es")],
    "ph" => &[(T::Region, "ph")],
    "pl" => &[(T::Region, "pl"), (T::Lang, "pl")],
    "pt" => &[(T::Region, "pt"), (T::Lang, "pt")],
    "qa" => &[(T::Region, "qa"), (T::Lang, "ar")],
    "ro" => &[(T::Region, "ro"), (T::Lang, "ro")],
    "ru" => &[(T::Region, "ru"), (T::Lang, "ru")],
    "se" => &[(T::Region, "se"), (T::Lang, "sv")],
    "sg" => &[(T::Region, "sg")],
    "si" => &[(T::Region, "si"), (T::Lang, "sl")],
    "sk" => &[(T::Region, "sk"), (T::Lang, "sk")],
    "th" => &[(T::Region, "th"), (T::Lang, "th")],
    "tr" => &[(T::Region, "tr")],
    "tw" => &[(T::Region, "tw"), (T::Lang, "zh")],
    "us" => &[(T::Region, "us"), (T::Lang, "en")],
    "vn" => &[(T::Region, "vn"), (T::Lang, "vi")],
    "yu" => &[(T::Region, "yu")],
    "za" => &[(T::Region, "za")],
    // Languages
    "ar" => &[(T::Lang, "ar")],
    "bs" => &[(T::Lang, "bs")],
    "el" => &[(T::Lang, "el")],
    "en" => &[(T::Lang, "en")],
    "eo" => &[(T::Lang, "eo")],
    "fa" => &[(T::Lang, "fa")],
    "ga" => &[(T::Lang, "ga")],
    "gu" => &[(T::Lang, "gu")],
    "he" => &[(T::Lang, "he")],
    "hi" => &[(T::Lang, "hi")],
    "ms" => &[(T::Lang, "ms")],
    "sl" => &[(T::Lang, "sl")],
    "sq" => &[(T::Lang, "sq")],
    "sr" => &[(T::Lang, "sr")],
    "ur" => &[(T::Lang, "ur")],
    "vi" => &[(T::Lang, "vi")],
    "yi" => &[(T::Lang, "yi")],
    "zh" => &[(T::Lang, "zh")],
    "ja" => &[(T::Lang, "ja")],
    "ko" => &[(T::Lang, "ko")],
    "sv" => &[(T::Lang, "sv")],
    "da" => &[(T::Lang, "da")],
    "ch-trad" => &[(T::Lang, "zh"), (T::Lang, "zh-trad")],
    "ch-simple" => &[(T::Lang, "zh"), (T::Lang, "zh-hans")],
    "bra" => &[(T::Lang, "pt-br")],
    // Year ranges
    "19xx" => &[(T::Year, "19xx")],
    "197x" => &[(T::Year, "197x")],
    "198x" => &[(T::Year, "198x")],
    "199x" => &[(T::Year, "199x")],
    "20xx" => &[(T::Year, "20xx")],
    "200x" => &[(T::Year, "200x")],
    "201x" => &[(T::Year, "201x")],
    "202x" => &[(T::Year, "202x")],
    // Development status
    "alpha" => &[(T::Unfinished, "alpha")],
    "beta" => &[(T::Unfinished, "beta")],
    "beta-1" => &[(T::Unfinished, "beta:1")],
    "beta-2" => &[(T::Unfinished, "beta:2")],
    "beta-3" => &[(T::Unfinished, "beta:3")],
    "beta-4" => &[(T::Unfinished, "beta:4")],
    "beta-5" => &[(T::Unfinished, "beta:5")],
    "preview" => &[(T::Unfinished, "preview")],
    "pre-release" => &[(T::Unfinished, "prerelease")],
    "proto" => &[(T::Unfinished, "proto")],
    "proto-1" => &[(T::Unfinished, "proto:1")],
    "proto-2" => &[(T::Unfinished, "proto:2")],
    "proto-3" => &[(T::Unfinished, "proto:3")],
    "proto-4" => &[(T::Unfinished, "proto:4")],
    "sample" => &[(T::Unfinished, "sample")],
    "demo" => &[(T::Unfinished, "demo")],
    "demo-1" => &[(T::Unfinished, "demo:1")],
    "demo-2" => &[(T::Unfinished, "demo:2")],
    "demo-auto" => &[(T::Unfinished, "demo:auto")],
    "demo-kiosk" => &[(T::Unfinished, "demo:kiosk")],
    "demo-playable" => &[(T::Unfinished, "demo:playable")],
    "demo-rolling" => &[(T::Unfinished, "demo:rolling")],
    "demo-slideshow" => &[(T::Unfinished, "demo:slideshow")],
    "debug" => &[(T::Unfinished, "debug")],
    "competition" => &[(T::Unfinished, "competition")],
    // Revisions
    "rev" => &[(T::Rev, "1")],
    "rev-1" => &[(T::Rev, "1")],
    "rev-2" => &[(T::Rev, "2")],
    "rev-3" => &[(T::Rev, "3")],
    "rev-4" => &[(T::Rev, "4")],
    "rev-5" => &[(T::Rev, "5")],
    "rev-a" => &[(T::Rev, "a")],
    "rev-b" => &[(T::Rev, "b")],
    "rev-c" => &[(T::Rev, "c")],
    "rev-d" => &[(T::Rev, "d")],
    "rev-e" => &[(T::Rev, "e")],
    "rev-g" => &[(T::Rev, "g")],
    "v" => &[(T::Rev, "1")],
    "v1" => &[(T::Rev, "1")],
    "v2" => &[(T::Rev, "2")],
    "v3" => &[(T::Rev, "3")],
    "v4" => &[(T::Rev, "4")],
    "v5" => &[(T::Rev, "5")],
    "prg" => &[(T::Rev, "prg")],
    "prg0" => &[(T::Rev, "prg:0")],
    "prg1" => &[(T::Rev, "prg:1")],
    "prg2" => &[(T::Rev, "prg:2")],
    "prg3" => &[(T::Rev, "prg:3")],
    "unl" => &[(T::Unlicensed, "unlicensed")],
    // Video standards
    "cga" => &[(T::Video, "cga")],
    "ega" => &[(T::Video, "ega")],
    "hgc" => &[(T::Video, "hgc")],
    "mcga" => &[(T::Video, "mcga")],
    "mda" => &[(T::Video, "mda")],
    "ntsc" => &[(T::Video, "ntsc")],
    "ntsc-pal" => &[(T::Video, "ntsc-pal")],
    "pal" => &[(T::Video, "pal")],
    "pal-60" => &[(T::Video, "pal-60")],
    "pal-ntsc" => &[(T::Video, "pal-ntsc")],
    "svga" => &[(T::Video, "svga")],
    "vga" => &[(T::Video, "vga")],
    "xga" => &[(T::Video, "xga")],
    // Copyright status
    "cw" => &[(T::Copyright, "cw")],
    "cw-r" => &[(T::Copyright, "cw-r")],
    "fw" => &[(T::Copyright, "fw")],
    "gw" => &[(T::Copyright, "gw")],
    "gw-r" => &[(T::Copyright, "gw-r")],
    "lw" => &[(T::Copyright, "lw")],
    "pd" => &[(T::Copyright, "pd")],
    "sw" => &[(T::Copyright, "sw")],
    "sw-r" => &[(T::Copyright, "sw-r")],
    // Dump status
    "cr" => &[(T::Dump, "cracked")],
    "f" => &[(T::Dump, "fixed")],
    "h" => &[(T::Dump, "hacked")],
    "m" => &[(T::Dump, "modified")],
    "p" => &[(T::Dump, "pirated")],
    "t" => &[(T::Dump, "trained")],
    "o" => &[(T::Dump, "overdump")],
    "u" => &[(T::Dump, "underdump")],
    "b" => &[(T::Dump, "bad")],
    "a" => &[(T::Dump, "alternate")],
    "!" => &[(T::Dump, "verified")],
    "!p" => &[(T::Dump, "pending")],
    "c" => &[(T::Dump, "checksum-bad")],
    "x" => &[(T::Dump, "checksum-unknown")],
    "bios" => &[(T::Dump, "bios")],
    "hffe" => &[(T::Dump, "hacked"), (T::Dump, "hacked:ffe")],
    "hir" => &[(T::Dump, "hacked"), (T::Dump, "hacked:intro-removed")],
    "hir00" => &[(T::Dump, "hacked"), (T::Dump, "hacked:intro-removed")],
    "hirff" => &[(T::Dump, "hacked"), (T::Dump, "hacked:intro-removed")],
    // Hardware compatibility
    "+2" => &[(T::Compatibility, "amiga:plus2")],
    "+2a" => &[(T::Compatibility, "amiga:plus2a")],
    "+3" => &[(T::Compatibility, "amiga:plus3")],
    "130xe" => &[(T::Compatibility, "atari:130xe")],
    "a1000" => &[(T::Compatibility, "amiga:a1000")],
    "a1200" => &[(T::Compatibility, "amiga:a1200")],
    "a1200-a4000" => &[(T::Compatibility, "amiga:a1200-a4000")],
    "a2000" => &[(T::Compatibility, "amiga:a2000")],
    "a2000-a3000" => &[(T::Compatibility, "amiga:a2000-a3000")],
    "a2024" => &[(T::Compatibility, "amiga:a2024")],
    "a2500-a3000ux" => &[(T::Compatibility, "amiga:a2500-a3000ux")],
    "a3000" => &[(T::Compatibility, "amiga:a3000")],
    "a4000" => &[(T::Compatibility, "amiga:a4000")],
    "a4000t" => &[(T::Compatibility, "amiga:a4000t")],
    "a500" => &[(T::Compatibility, "amiga:a500")],
    "a500+" => &[(T::Compatibility, "amiga:a500plus")],
    "a500-a1000-a2000" => &[(T::Compatibility, "amiga:a500-a1000-a2000")],
    "a500-a1000-a2000-cdtv" => &[(T::Compatibility, "amiga:a500-a1000-a2000-cdtv")],
    "a500-a1200" => &[(T::Compatibility, "amiga:a500-a1200")],
    "a500-a1200-a2000-a4000" => &[(T::Compatibility, "amiga:a500-a1200-a2000-a4000")],
    "a500-a2000" => &[(T::Compatibility, "amiga:a500-a2000")],
    "a500-a600-a2000" => &[(T::Compatibility, "amiga:a500-a600-a2000")],
    "a570" => &[(T::Compatibility, "amiga:a570")],
    "a600" => &[(T::Compatibility, "amiga:a600")],
    "a600hd" => &[(T::Compatibility, "amiga:a600hd")],
    "aga" => &[(T::Compatibility, "amiga:aga")],
    "aga-cd32" => &[(T::Compatibility, "amiga:aga-cd32")],
    "cd32" => &[(T::Compatibility, "amiga:cd32")],
    "cdtv" => &[(T::Compatibility, "amiga:cdtv")],
    "ecs" => &[(T::Compatibility, "amiga:ecs")],
    "ecs-aga" => &[(T::Compatibility, "amiga:ecs-aga")],
    "ocs" => &[(T::Compatibility, "amiga:ocs")],
    "ocs-aga" => &[(T::Compatibility, "amiga:ocs-aga")],
    "adam" => &[(T::Compatibility, "coleco:adam")],
    "doctor-pc-jr" => &[(T::Compatibility, "ibmpc:doctorpcjr")],
    "executive" => &[(T::Compatibility, "atari:executive")],
    "mega-st" => &[(T::Compatibility, "atari:megast")],
    "mega-ste" => &[(T::Compatibility, "atari:megaste")],
    "orch80" => &[(T::Compatibility, "misc:orch80")],
    "osbourne-1" => &[(T::Compatibility, "osbourne:osbourne1")],
    "piano90" => &[(T::Compatibility, "misc:piano90")],
    "playchoice-10" => &[(T::Compatibility, "nintendo:playchoice10")],
    "plus4" => &[(T::Compatibility, "commodore:plus4")],
    "primo-a" => &[(T::Compatibility, "primo:primoa")],
    "primo-a64" => &[(T::Compatibility, "primo:primoa64")],
    "primo-b" => &[(T::Compatibility, "primo:primob")],
    "primo-b64" => &[(T::Compatibility, "primo:primob64")],
    "pro-primo" => &[(T::Compatibility, "primo:proprimo")],
    "st" => &[(T::Compatibility, "atari:st")],
    "ste" => &[(T::Compatibility, "atari:ste")],
    "ste-falcon" => &[(T::Compatibility, "atari:ste-falcon")],
    "tt" => &[(T::Compatibility, "atari:tt")],
    "turbo-r-gt" => &[(T::Compatibility, "msx:turbor-gt")],
    "turbo-r-st" => &[(T::Compatibility, "msx:turbor-st")],
    "vs-dualsystem" => &[(T::Compatibility, "nintendo:vsdualsystem")],
    "vs-unisystem" => &[(T::Compatibility, "nintendo:vsunisystem")],
    // Add-ons
    "aladdin-deck-enhancer" => &[(T::Addon, "lockon:deckenhancer")],
    "computrainer" => &[(T::Addon, "controller:computrainer")],
    "satellaview" => &[(T::Addon, "online:satellaview")],
    "sufami-turbo" => &[(T::Addon, "peripheral:sufami")],
    "nintendo-power" => &[(T::Addon, "online:nintendopower")],
    "j-cart" => &[(T::Addon, "controller:jcart")],
    "sn" => &[(T::Addon, "online:seganet")],
    "sega-net" => &[(T::Addon, "online:seganet")],
    "rumble-version" => &[(T::Addon, "controller:rumble")],
    // Arcade boards
    "vs" => &[(T::ArcadeBoard, "nintendo:vs")],
    "nss" => &[(T::ArcadeBoard, "nintendo:nss")],
    "megaplay" => &[(T::ArcadeBoard, "sega:megaplay")],
    "mp" => &[(T::ArcadeBoard, "sega:megaplay")],
    // Unlicensed publishers
    "sachen" => &[(T::Unlicensed, "unlicensed:sachen")],
    // Multigame
    "vol" => &[(T::Multigame, "vol:1")],
    "vol-1" => &[(T::Multigame, "vol:1")],
    "vol-2" => &[(T::Multigame, "vol:2")],
    "vol-3" => &[(T::Multigame, "vol:3")],
    "vol-4" => &[(T::Multigame, "vol:4")],
    "vol-5" => &[(T::Multigame, "vol:5")],
    "vol-6" => &[(T::Multigame, "vol:6")],
    "vol-7" => &[(T::Multigame, "vol:7")],
    "vol-8" => &[(T::Multigame, "vol:8")],
    "vol-9" => &[(T::Multigame, "vol:9")],
    "menu" => &[(T::Multigame, "menu")],
    // Reboxed
    "bundle" => &[(T::Reboxed, "bundle")],
    "md-bundle" => &[(T::Reboxed, "bundle:genesis")],
    "genesis-bundle" => &[(T::Reboxed, "bundle:genesis")],
    // Media
    "disc" => &[(T::Media, "disc")],
    "disc-1" => &[(T::Media, "disc"), (T::Disc, "1")],
    "disc-2" => &[(T::Media, "disc"), (T::Disc, "2")],
    "disc-3" => &[(T::Media, "disc"), (T::Disc, "3")],
    "disc-4" => &[(T::Media, "disc"), (T::Disc, "4")],
    "disc-5" => &[(T::Media, "disc"), (T::Disc, "5")],
    "disc-6" => &[(T::Media, "disc"), (T::Disc, "6")],
    "disc-7" => &[(T::Media, "disc"), (T::Disc, "7")],
    "disc-8" => &[(T::Media, "disc"), (T::Disc, "8")],
    "disc-9" => &[(T::Media, "disc"), (T::Disc, "9")],
    "disc-10" => &[(T::Media, "disc"), (T::Disc, "10")],
    "disk" => &[(T::Media, "disk")],
    "file" => &[(T::Media, "file")],
    "part" => &[(T::Media, "part")],
    "side" => &[(T::Media, "side")],
    "tape" => &[(T::Media, "tape")],
    "cart" => &[(T::Media, "cart")],
    "cartridge" => &[(T::Media, "cart")],
    "n64dd" => &[(T::Media, "n64dd")],
    "fds" => &[(T::Media, "fds")],
    "e-reader" => &[(T::Media, "ereader")],
    "mb" => &[(T::Media, "multiboot")],
    "multiboot" => &[(T::Media, "multiboot")],
};
